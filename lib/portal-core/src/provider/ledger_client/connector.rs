use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::proto::session::SessionProvider;
use crate::provider::http_client::HttpClient;
use crate::provider::ledger_client::LedgerClient;
use crate::provider::ledger_client::http_client::HttpLedgerClient;

/// Owns the one ledger client instance and hands out shared handles to it.
///
/// Connection state such as the fetched root key lives on the client, so all
/// services must talk through the same instance. The connector is built once
/// during core setup and injected wherever ledger access is needed.
pub struct LedgerConnector {
    client: Arc<dyn LedgerClient>,
}

impl LedgerConnector {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        session_provider: Arc<dyn SessionProvider>,
        config: &CoreConfig,
    ) -> Self {
        Self {
            client: Arc::new(HttpLedgerClient::new(http_client, session_provider, config)),
        }
    }

    /// Wraps an externally built client. Tests use this to splice in mocks.
    pub fn from_client(client: Arc<dyn LedgerClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> Arc<dyn LedgerClient> {
        self.client.clone()
    }
}
