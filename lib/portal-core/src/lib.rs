//! Client core of the DecentCredit admin console and institution portal.
//!
//! The crate binds the remote credit service into typed Rust calls, converts
//! between wire shapes and display values, and owns the identity session the
//! calls run under. Rendering and navigation stay with the embedding
//! application; everything below the view layer lives here.

use std::sync::Arc;

use config::core_config::CoreConfig;
use config::validator::validate_core_config;
use proto::session::SessionProvider;
use provider::http_client::HttpClient;
use provider::identity::http_provider::HttpIdentityProvider;
use provider::ledger_client::connector::LedgerConnector;
use provider::session_storage::SessionStorage;
use service::assessment::AssessmentService;
use service::dashboard::DashboardService;
use service::deduction::DeductionService;
use service::history::HistoryService;
use service::institution::InstitutionService;
use service::query::QueryService;
use service::error::ServiceError;
use service::session::SessionManager;
use service::settings::SettingsService;
use service::submission::SubmissionService;
use service::token::TokenService;

pub mod config;
pub mod proto;
pub mod provider;
pub mod service;
pub mod util;

/// One fully wired portal core.
///
/// Construction is plain dependency injection: the host hands over a
/// transport and a session store, everything downstream is built here and
/// shares the single [`SessionManager`] as its view of the caller.
/// Construction fails when the configuration does not pass
/// [`validate_core_config`].
#[derive(Clone)]
pub struct PortalCore {
    pub session_manager: SessionManager,
    pub institution_service: InstitutionService,
    pub submission_service: SubmissionService,
    pub query_service: QueryService,
    pub assessment_service: AssessmentService,
    pub deduction_service: DeductionService,
    pub token_service: TokenService,
    pub settings_service: SettingsService,
    pub history_service: HistoryService,
    pub dashboard_service: DashboardService,
}

impl PortalCore {
    pub fn new(
        config: &CoreConfig,
        http_client: Arc<dyn HttpClient>,
        session_storage: Arc<dyn SessionStorage>,
    ) -> Result<Self, ServiceError> {
        validate_core_config(config)?;

        let identity_provider = Arc::new(HttpIdentityProvider::new(
            http_client.clone(),
            config.identity.clone(),
        ));
        let session_manager = SessionManager::new(
            identity_provider,
            session_storage,
            config.session.clone(),
        );
        let session_provider: Arc<dyn SessionProvider> = Arc::new(session_manager.clone());
        let connector = LedgerConnector::new(http_client, session_provider.clone(), config);
        let ledger_client = connector.client();

        Ok(Self {
            institution_service: InstitutionService::new(
                ledger_client.clone(),
                session_manager.clone(),
            ),
            submission_service: SubmissionService::new(
                ledger_client.clone(),
                session_provider.clone(),
            ),
            query_service: QueryService::new(ledger_client.clone(), session_provider.clone()),
            assessment_service: AssessmentService::new(
                ledger_client.clone(),
                session_provider.clone(),
            ),
            deduction_service: DeductionService::new(ledger_client.clone()),
            token_service: TokenService::new(ledger_client.clone(), session_provider.clone()),
            settings_service: SettingsService::new(ledger_client.clone(), session_provider.clone()),
            history_service: HistoryService::new(ledger_client.clone(), session_provider.clone()),
            dashboard_service: DashboardService::new(ledger_client, session_provider),
            session_manager,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::core_config::{IdentityConfig, LedgerConfig};
    use crate::provider::http_client::reqwest_client::ReqwestClient;
    use crate::provider::session_storage::in_memory::InMemorySessionStorage;

    fn core_config() -> CoreConfig {
        CoreConfig {
            ledger: LedgerConfig {
                host: "http://127.0.0.1:8000".to_string(),
                service_id: "credit-service".to_string(),
                ..Default::default()
            },
            identity: IdentityConfig {
                provider_url: "http://identity.localhost:8000/authorize".to_string(),
                derivation_origin: "http://portal.localhost:8000".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_core_builds_from_a_valid_config() {
        let core = PortalCore::new(
            &core_config(),
            Arc::new(ReqwestClient::default()),
            Arc::new(InMemorySessionStorage::default()),
        );

        assert!(core.is_ok());
    }

    #[test]
    fn test_core_rejects_an_invalid_config() {
        let mut config = core_config();
        config.ledger.host = "not a url".to_string();

        let result = PortalCore::new(
            &config,
            Arc::new(ReqwestClient::default()),
            Arc::new(InMemorySessionStorage::default()),
        );

        assert!(matches!(result, Err(ServiceError::ConfigValidationError(_))));
    }
}
