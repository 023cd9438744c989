use time::OffsetDateTime;

use super::dto::{CreditScoreDTO, InstitutionResponseDTO};
use crate::proto::institution::Institution;
use crate::util::timestamp::from_ledger_ns;

impl From<Institution> for InstitutionResponseDTO {
    fn from(value: Institution) -> Self {
        Self {
            id: value.id,
            name: value.name,
            full_name: value.full_name,
            status: value.status.into(),
            join_time: activity_timestamp(value.join_time),
            last_active: activity_timestamp(value.last_active),
            api_calls: value.api_calls,
            dcc_consumed: value.dcc_consumed,
            data_uploads: value.data_uploads,
            credit_score: CreditScoreDTO {
                score: value.credit_score.score,
                last_update: activity_timestamp(value.credit_score.last_update),
            },
            token_trading: value.token_trading.into(),
        }
    }
}

/// The ledger stores zero for activity fields it has never written.
fn activity_timestamp(ns: u64) -> Option<OffsetDateTime> {
    if ns == 0 {
        return None;
    }

    from_ledger_ns(ns)
}
