pub mod http_client;
pub mod identity;
pub mod ledger_client;
pub mod session_storage;
