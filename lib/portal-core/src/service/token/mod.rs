use std::sync::Arc;

use crate::proto::session::SessionProvider;
use crate::provider::ledger_client::LedgerClient;

pub mod dto;
pub mod mapper;
pub mod service;

#[derive(Clone)]
pub struct TokenService {
    ledger_client: Arc<dyn LedgerClient>,
    session_provider: Arc<dyn SessionProvider>,
}

impl TokenService {
    pub fn new(
        ledger_client: Arc<dyn LedgerClient>,
        session_provider: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            ledger_client,
            session_provider,
        }
    }
}
