use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::core_config::IdentityConfig;
use crate::provider::http_client::HttpClient;
use crate::provider::identity::{AuthorizedIdentity, IdentityError, IdentityProvider};

/// [`IdentityProvider`] talking to the platform identity service over HTTP.
///
/// The handshake posts the derivation origin and the requested delegation
/// lifetime to the configured authorize endpoint and gets back the principal
/// together with a session token. The whole exchange is bounded by
/// `handshakeTimeout`; a user abandoning the prompt surfaces as
/// [`IdentityError::Timeout`].
pub struct HttpIdentityProvider {
    http_client: Arc<dyn HttpClient>,
    config: IdentityConfig,
}

#[derive(Serialize)]
struct AuthorizeRequest<'a> {
    derivation_origin: &'a str,
    max_time_to_live_ns: u64,
}

#[derive(Deserialize)]
struct AuthorizeResponse {
    principal: String,
    session_token: String,
}

impl HttpIdentityProvider {
    pub fn new(http_client: Arc<dyn HttpClient>, config: IdentityConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    async fn run_handshake(&self) -> Result<AuthorizedIdentity, IdentityError> {
        let requested_ttl_ns = u64::try_from(self.config.max_time_to_live.whole_nanoseconds())
            .unwrap_or(u64::MAX);

        let response = self
            .http_client
            .post(&self.config.provider_url)
            .form(AuthorizeRequest {
                derivation_origin: &self.config.derivation_origin,
                max_time_to_live_ns: requested_ttl_ns,
            })
            .context("form error")
            .map_err(IdentityError::Transport)?
            .send()
            .await
            .context("send error")
            .map_err(IdentityError::Transport)?;

        if response.status.is_client_error() {
            let reason = serde_json::from_slice::<Value>(&response.body)
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("status {}", response.status.0));
            return Err(IdentityError::Rejected(reason));
        }

        response
            .error_for_status()
            .context("status error")
            .map_err(IdentityError::Transport)?
            .json::<AuthorizeResponse>()
            .context("parsing error")
            .map_err(IdentityError::Transport)
            .map(|authorized| AuthorizedIdentity {
                principal: authorized.principal,
                session_token: authorized.session_token,
            })
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn authorize(&self) -> Result<AuthorizedIdentity, IdentityError> {
        let limit = std::time::Duration::try_from(self.config.handshake_timeout)
            .unwrap_or(std::time::Duration::ZERO);

        tokio::time::timeout(limit, self.run_handshake())
            .await
            .map_err(|_| IdentityError::Timeout(self.config.handshake_timeout.whole_seconds()))?
    }
}
