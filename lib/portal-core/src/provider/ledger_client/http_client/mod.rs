use std::sync::Arc;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::Display;
use tokio::sync::OnceCell;
use url::Url;

use crate::config::core_config::{CoreConfig, Environment};
use crate::proto::reply::CallReply;
use crate::proto::session::SessionProvider;
use crate::provider::http_client::{HttpClient, Response};
use crate::provider::ledger_client::LedgerClientError;

pub mod provider;

/// Whether an operation reads state or mutates it. The gateway routes the
/// two through different paths, mirroring the service's own split.
#[derive(Clone, Copy, Debug, Display)]
#[strum(serialize_all = "lowercase")]
enum CallMode {
    Query,
    Call,
}

/// [`LedgerClient`](super::LedgerClient) speaking to the credit service
/// through its HTTP gateway.
///
/// Every operation becomes `POST {host}/api/v1/canister/{service_id}/{mode}/{method}`
/// with the positional arguments as a JSON array body. Each attempt is bounded
/// by `requestTimeout`; transport failures and timeouts are retried up to
/// `max_retries` times. Replies carrying the service's `Err` variant are
/// surfaced as-is and never retried.
pub struct HttpLedgerClient {
    http_client: Arc<dyn HttpClient>,
    session_provider: Arc<dyn SessionProvider>,
    host: String,
    service_id: String,
    request_timeout: std::time::Duration,
    max_retries: u32,
    environment: Environment,
    root_key: OnceCell<Option<Vec<u8>>>,
}

impl HttpLedgerClient {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        session_provider: Arc<dyn SessionProvider>,
        config: &CoreConfig,
    ) -> Self {
        Self {
            http_client,
            session_provider,
            host: config.ledger.host.trim_end_matches('/').to_string(),
            service_id: config.ledger.service_id.clone(),
            request_timeout: std::time::Duration::try_from(config.ledger.request_timeout)
                .unwrap_or(std::time::Duration::from_secs(30)),
            max_retries: config.ledger.max_retries,
            environment: config.environment,
            root_key: OnceCell::new(),
        }
    }

    /// Verification key fetched from the gateway, if the bootstrap succeeded.
    pub fn root_key(&self) -> Option<&[u8]> {
        self.root_key.get().and_then(|key| key.as_deref())
    }

    /// Fetches the gateway's root verification key once per client. Outside
    /// `Production` a missing key is logged and tolerated so that local
    /// gateways without one stay usable; in `Production` the platform key is
    /// compiled in and nothing is fetched.
    async fn ensure_root_key(&self) {
        if self.environment == Environment::Production {
            return;
        }

        self.root_key
            .get_or_init(|| async {
                let url = format!("{}/api/v1/status", self.host);
                let result = self
                    .http_client
                    .get(&url)
                    .send()
                    .await
                    .and_then(Response::error_for_status);
                match result {
                    Ok(response) => {
                        tracing::debug!("fetched gateway root key");
                        Some(response.body)
                    }
                    Err(error) => {
                        tracing::warn!(%error, "failed to fetch gateway root key, continuing without it");
                        None
                    }
                }
            })
            .await;
    }

    fn endpoint(&self, mode: CallMode, method: &str) -> Result<Url, LedgerClientError> {
        Url::parse(&format!(
            "{}/api/v1/canister/{}/{}/{}",
            self.host, self.service_id, mode, method
        ))
        .context("url error")
        .map_err(LedgerClientError::Transport)
    }

    async fn post_args(&self, url: &Url, args: &Value) -> Result<Response, LedgerClientError> {
        self.ensure_root_key().await;

        let token = self
            .session_provider
            .session()
            .and_then(|session| session.token);

        let mut attempt: u32 = 0;
        loop {
            let mut builder = self.http_client.post(url.as_str());
            if let Some(token) = &token {
                builder = builder.bearer_auth(token);
            }
            let request = builder
                .json(args)
                .context("json error")
                .map_err(LedgerClientError::Transport)?;

            // The timeout bounds a single attempt, not the whole retry loop.
            match tokio::time::timeout(self.request_timeout, request.send()).await {
                Ok(Ok(response))
                    if response.status.is_server_error() && attempt < self.max_retries =>
                {
                    tracing::warn!(
                        url = %url,
                        status = response.status.0,
                        attempt,
                        "ledger gateway answered with a server error, retrying"
                    );
                }
                Ok(Ok(response)) => {
                    return response
                        .error_for_status()
                        .context("status error")
                        .map_err(LedgerClientError::Transport);
                }
                Ok(Err(error)) if attempt < self.max_retries => {
                    tracing::warn!(%error, url = %url, attempt, "ledger call failed, retrying");
                }
                Ok(Err(error)) => {
                    return Err(LedgerClientError::Transport(
                        anyhow::Error::new(error).context("send error"),
                    ));
                }
                Err(_) if attempt < self.max_retries => {
                    tracing::warn!(url = %url, attempt, "ledger call timed out, retrying");
                }
                Err(_) => {
                    return Err(LedgerClientError::Transport(anyhow::anyhow!(
                        "ledger call timed out after {}s",
                        self.request_timeout.as_secs()
                    )));
                }
            }

            attempt += 1;
        }
    }

    /// Operation whose reply is the value itself, with no `Ok`/`Err` envelope.
    async fn call_plain<T: DeserializeOwned>(
        &self,
        mode: CallMode,
        method: &str,
        args: Value,
    ) -> Result<T, LedgerClientError> {
        let url = self.endpoint(mode, method)?;
        self.post_args(&url, &args)
            .await?
            .json::<T>()
            .map_err(|error| LedgerClientError::MalformedReply(format!("{method}: {error}")))
    }

    /// Operation answering with the `Ok`/`Err` envelope; `Err` becomes
    /// [`LedgerClientError::Application`].
    async fn call_enveloped<T: DeserializeOwned>(
        &self,
        mode: CallMode,
        method: &str,
        args: Value,
    ) -> Result<T, LedgerClientError> {
        self.call_plain::<CallReply<T>>(mode, method, args)
            .await?
            .into_result()
            .map_err(LedgerClientError::Application)
    }

    /// List operation with per-item decoding. One malformed element is
    /// dropped with a warning instead of failing the whole reply, so a single
    /// bad record cannot blank out a list view.
    async fn call_list<T: DeserializeOwned>(
        &self,
        mode: CallMode,
        method: &str,
        args: Value,
    ) -> Result<Vec<T>, LedgerClientError> {
        let items: Vec<Value> = self.call_plain(mode, method, args).await?;

        Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(value) => Some(value),
                Err(error) => {
                    tracing::warn!(%error, method, "skipping malformed reply item");
                    None
                }
            })
            .collect())
    }

    /// Fire-and-forget mutation. The service replies with nothing, so only
    /// transport success is confirmed.
    async fn call_void(
        &self,
        mode: CallMode,
        method: &str,
        args: Value,
    ) -> Result<(), LedgerClientError> {
        let url = self.endpoint(mode, method)?;
        self.post_args(&url, &args).await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::core_config::LedgerConfig;
    use crate::proto::session::MockSessionProvider;
    use crate::provider::http_client::reqwest_client::ReqwestClient;
    use crate::provider::ledger_client::LedgerClient;
    use crate::service::test_utilities::admin_session;

    fn test_config(host: &str, environment: Environment) -> CoreConfig {
        CoreConfig {
            ledger: LedgerConfig {
                host: host.to_string(),
                service_id: "rrkah-fqaaa-aaaaa-aaaaq-cai".to_string(),
                max_retries: 3,
                ..Default::default()
            },
            environment,
            ..Default::default()
        }
    }

    fn anonymous() -> Arc<MockSessionProvider> {
        let mut session_provider = MockSessionProvider::default();
        session_provider.expect_session().returning(|| None);
        Arc::new(session_provider)
    }

    fn client_against(
        host: &str,
        environment: Environment,
        session_provider: Arc<dyn SessionProvider>,
    ) -> HttpLedgerClient {
        HttpLedgerClient::new(
            Arc::new(ReqwestClient::default()),
            session_provider,
            &test_config(host, environment),
        )
    }

    #[tokio::test]
    async fn test_enveloped_reply_ok_is_unwrapped() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/api/v1/canister/rrkah-fqaaa-aaaaa-aaaaq-cai/call/reset_password",
            ))
            .and(body_json(json!(["aaaaa-aa"])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Ok": "s3cret"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server.uri(), Environment::Production, anonymous());

        let password = client
            .reset_password("aaaaa-aa".parse().unwrap())
            .await
            .unwrap();

        assert_eq!("s3cret", password);
    }

    #[tokio::test]
    async fn test_enveloped_reply_err_surfaces_as_application_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"Err": "机构不存在"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server.uri(), Environment::Production, anonymous());

        let result = client.reset_password("aaaaa-aa".parse().unwrap()).await;

        assert!(
            matches!(result, Err(LedgerClientError::Application(message)) if message == "机构不存在")
        );
    }

    #[tokio::test]
    async fn test_plain_reply_is_parsed_without_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/api/v1/canister/rrkah-fqaaa-aaaaa-aaaaq-cai/query/get_institution",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server.uri(), Environment::Production, anonymous());

        let institution = client
            .get_institution("aaaaa-aa".parse().unwrap())
            .await
            .unwrap();

        assert!(institution.is_none());
    }

    #[tokio::test]
    async fn test_server_errors_are_retried_application_errors_are_not() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Ok": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server.uri(), Environment::Production, anonymous());

        let deducted = client
            .deduct_query_token("aaaaa-aa".parse().unwrap(), "did:dc:user1".parse().unwrap())
            .await
            .unwrap();

        assert!(deducted);
    }

    #[tokio::test]
    async fn test_slow_gateway_reply_is_a_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!(null))
                    .set_delay(std::time::Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let mut config = test_config(&mock_server.uri(), Environment::Production);
        config.ledger.request_timeout = time::Duration::milliseconds(50);
        config.ledger.max_retries = 0;
        let client = HttpLedgerClient::new(
            Arc::new(ReqwestClient::default()),
            anonymous(),
            &config,
        );

        let result = client.get_institution("aaaaa-aa".parse().unwrap()).await;

        assert!(matches!(result, Err(LedgerClientError::Transport(_))));
    }

    #[tokio::test]
    async fn test_one_malformed_list_item_is_dropped_not_fatal() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/api/v1/canister/rrkah-fqaaa-aaaaa-aaaaq-cai/query/get_all_institutions",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "aaaaa-aa",
                    "name": "test-bank",
                    "full_name": "Test Bank Co., Ltd.",
                    "password_hash": "argon2id$dummy",
                    "status": "Active",
                    "join_time": 1_711_238_400_000_000_000u64,
                    "last_active": 1_711_238_400_000_000_000u64,
                    "api_calls": 42,
                    "dcc_consumed": 7,
                    "data_uploads": 13,
                    "credit_score": {"score": 80, "last_update": 1_711_238_400_000_000_000u64},
                    "token_trading": {"bought": 1000, "sold": 250},
                },
                {"id": "bbbbb-bb", "status": "Hibernating"},
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server.uri(), Environment::Production, anonymous());

        let institutions = client.get_all_institutions().await.unwrap();

        assert_eq!(1, institutions.len());
        assert_eq!("test-bank", institutions[0].name);
    }

    #[tokio::test]
    async fn test_session_token_rides_along_as_bearer_auth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("Authorization", "Bearer portal-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut session_provider = MockSessionProvider::default();
        session_provider
            .expect_session()
            .returning(|| Some(admin_session()));

        let client = client_against(
            &mock_server.uri(),
            Environment::Production,
            Arc::new(session_provider),
        );

        client
            .update_credit_score("aaaaa-aa".parse().unwrap(), 720)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_root_key_is_fetched_once_outside_production() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"root-key".to_vec()))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server.uri(), Environment::Local, anonymous());

        client.get_all_institutions().await.unwrap();
        client.get_all_institutions().await.unwrap();

        assert_eq!(Some(b"root-key".as_slice()), client.root_key());
    }

    #[tokio::test]
    async fn test_failed_root_key_fetch_is_tolerated_and_not_repeated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/status"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server.uri(), Environment::Local, anonymous());

        client.get_all_institutions().await.unwrap();
        client.get_all_institutions().await.unwrap();

        assert_eq!(None, client.root_key());
    }

    #[tokio::test]
    async fn test_production_never_asks_the_gateway_for_a_root_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/status"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = client_against(&mock_server.uri(), Environment::Production, anonymous());

        client.get_all_institutions().await.unwrap();

        assert_eq!(None, client.root_key());
    }
}
