use std::sync::Arc;

use crate::provider::ledger_client::LedgerClient;
use crate::service::session::SessionManager;

pub mod dto;
pub mod mapper;
pub mod service;

#[derive(Clone)]
pub struct InstitutionService {
    ledger_client: Arc<dyn LedgerClient>,
    session_manager: SessionManager,
}

impl InstitutionService {
    pub fn new(ledger_client: Arc<dyn LedgerClient>, session_manager: SessionManager) -> Self {
        Self {
            ledger_client,
            session_manager,
        }
    }
}
