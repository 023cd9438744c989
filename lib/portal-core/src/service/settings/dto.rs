use one_dto_mapper::{From, Into};

use crate::proto::settings::ServiceSettings;

/// Data service settings as shown on the institution settings screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq, From, Into)]
#[from(ServiceSettings)]
#[into(ServiceSettings)]
pub struct ServiceSettingsDTO {
    pub data_service_enabled: bool,
    pub query_price: u64,
    pub reward_share_ratio: u8,
}
