pub mod http_provider;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Identity transport error: {0}")]
    Transport(#[from] anyhow::Error),
    #[error("Identity handshake rejected: {0}")]
    Rejected(String),
    #[error("Identity handshake timed out after {0}s")]
    Timeout(i64),
}

/// Outcome of a completed identity handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedIdentity {
    /// Textual principal of the authenticated caller.
    pub principal: String,
    /// Token the ledger gateway accepts as proof of the delegation. Carried
    /// as a bearer header on every call made within the session.
    pub session_token: String,
}

/// Delegated-identity handshake against the platform's identity service.
///
/// Implementations exchange the configured derivation origin for a principal
/// plus a delegation token with a bounded lifetime. Verifying the delegation
/// chain is the gateway's job, not the portal's.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authorize(&self) -> Result<AuthorizedIdentity, IdentityError>;
}
