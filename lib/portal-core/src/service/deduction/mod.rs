use std::sync::Arc;

use crate::provider::ledger_client::LedgerClient;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct DeductionService {
    ledger_client: Arc<dyn LedgerClient>,
}

impl DeductionService {
    pub fn new(ledger_client: Arc<dyn LedgerClient>) -> Self {
        Self { ledger_client }
    }
}
