use serde::{Deserialize, Serialize};
use shared_types::InstitutionId;
use strum_macros::{Display, EnumString};
use time::OffsetDateTime;

/// How the current caller was classified after authentication.
///
/// A session starts out `Pending` right after the identity handshake and is
/// upgraded once the portal login call confirms who the principal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum SessionRole {
    Admin,
    Institution,
    Pending,
}

/// Snapshot of the established session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub principal: String,
    pub role: SessionRole,
    pub token: Option<String>,
    pub institution_id: Option<InstitutionId>,
    pub institution_name: Option<String>,
    pub established_at: OffsetDateTime,
}

/// Read-only view of the ambient session, injected wherever a component
/// needs the caller's identity without owning the session lifecycle.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SessionProvider: Send + Sync {
    fn session(&self) -> Option<Session>;
}
