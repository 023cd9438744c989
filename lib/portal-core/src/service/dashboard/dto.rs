use shared_types::InstitutionId;
use time::OffsetDateTime;

use crate::service::institution::dto::InstitutionStatusDTO;

/// Aggregates for the admin console landing page, computed from the full
/// institution list in one pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AdminDashboardDTO {
    pub institution_total: u64,
    pub institution_active: u64,
    pub institution_joined_today: u64,
    pub api_call_total: u64,
    pub data_upload_total: u64,
    pub token_reward_total: u64,
    pub token_consumed_total: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ApiQuotaDTO {
    pub used: u64,
    pub total: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DashboardTokenDTO {
    pub balance: i64,
    pub earned: u64,
    pub spent: u64,
}

/// Overview tiles for the institution portal landing page.
#[derive(Clone, Debug, PartialEq)]
pub struct InstitutionDashboardDTO {
    pub institution_id: InstitutionId,
    pub name: String,
    pub status: InstitutionStatusDTO,
    pub joined_at: Option<OffsetDateTime>,
    pub submission_count: u64,
    pub query_count: u64,
    pub api_quota: ApiQuotaDTO,
    pub token: DashboardTokenDTO,
}
