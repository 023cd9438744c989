use time::OffsetDateTime;

use super::dto::{AdminDashboardDTO, ApiQuotaDTO, DashboardTokenDTO, InstitutionDashboardDTO};
use crate::proto::institution::{Institution, InstitutionStatus};
use crate::util::timestamp::from_ledger_ns;

/// Per-institution API allowance shown on the quota tile.
pub(super) const API_QUOTA_TOTAL: u64 = 10_000;

pub(super) fn admin_overview(
    institutions: &[Institution],
    today_start: OffsetDateTime,
) -> AdminDashboardDTO {
    let mut overview = AdminDashboardDTO {
        institution_total: institutions.len() as u64,
        ..Default::default()
    };

    for institution in institutions {
        if institution.status == InstitutionStatus::Active {
            overview.institution_active += 1;
        }
        if activity_timestamp(institution.join_time).is_some_and(|joined| joined >= today_start) {
            overview.institution_joined_today += 1;
        }
        overview.api_call_total += institution.api_calls;
        overview.data_upload_total += institution.data_uploads;
        overview.token_reward_total += institution.token_trading.bought;
        overview.token_consumed_total += institution.dcc_consumed;
    }

    overview
}

pub(super) fn institution_overview(institution: Institution) -> InstitutionDashboardDTO {
    let bought = institution.token_trading.bought;
    let sold = institution.token_trading.sold;

    InstitutionDashboardDTO {
        institution_id: institution.id,
        name: institution.name,
        status: institution.status.into(),
        joined_at: activity_timestamp(institution.join_time),
        submission_count: institution.data_uploads,
        query_count: institution.api_calls,
        api_quota: ApiQuotaDTO {
            used: institution.api_calls,
            total: API_QUOTA_TOTAL,
        },
        token: DashboardTokenDTO {
            balance: bought as i64 - sold as i64,
            earned: bought,
            spent: sold,
        },
    }
}

/// The ledger stores zero for activity fields it has never written.
fn activity_timestamp(ns: u64) -> Option<OffsetDateTime> {
    if ns == 0 {
        return None;
    }

    from_ledger_ns(ns)
}
