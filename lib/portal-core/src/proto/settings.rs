use serde::{Deserialize, Serialize};

/// Per-institution data service settings.
///
/// `query_price` is whole DCC tokens per query; `reward_share_ratio` is an
/// integer percentage between 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    pub data_service_enabled: bool,
    pub query_price: u64,
    pub reward_share_ratio: u8,
}
