use std::sync::Arc;

use crate::config::core_config::SessionConfig;
use crate::provider::identity::IdentityProvider;
use crate::provider::session_storage::SessionStorage;

mod mapper;
pub mod service;

pub(crate) const PRINCIPAL_KEY: &str = "portal.principal";
pub(crate) const ROLE_KEY: &str = "portal.role";
pub(crate) const TOKEN_KEY: &str = "portal.token";
pub(crate) const INSTITUTION_ID_KEY: &str = "portal.institution_id";
pub(crate) const INSTITUTION_NAME_KEY: &str = "portal.institution_name";
pub(crate) const ESTABLISHED_AT_KEY: &str = "portal.established_at";

/// Owns the session lifecycle: the identity handshake, role classification,
/// expiry and teardown. Everything else reads the session through the
/// [`SessionProvider`](crate::proto::session::SessionProvider) view.
#[derive(Clone)]
pub struct SessionManager {
    identity_provider: Arc<dyn IdentityProvider>,
    storage: Arc<dyn SessionStorage>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        storage: Arc<dyn SessionStorage>,
        config: SessionConfig,
    ) -> Self {
        Self {
            identity_provider,
            storage,
            config,
        }
    }
}
