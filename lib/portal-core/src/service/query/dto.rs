use one_dto_mapper::From;
use shared_types::{InstitutionId, LoanId, RecordId, UserDid};
use strum_macros::Display;
use time::{Date, OffsetDateTime};

use crate::proto::record::RecordStatistics;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RecordTypeDTO {
    Loan,
    Repayment,
    Notification,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RecordStatusDTO {
    Pending,
    Confirmed,
    Rejected,
}

/// Record payload flattened for display. Amounts are display units.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordContentDTO {
    Loan {
        amount: f64,
        loan_id: LoanId,
        term_months: u64,
        interest_rate: f64,
    },
    Repayment {
        amount: f64,
        loan_id: LoanId,
        repayment_date: String,
    },
    Notification {
        amount: f64,
        days: u64,
        period_amount: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreditRecordResponseDTO {
    pub id: RecordId,
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub institution_full_name: String,
    pub record_type: RecordTypeDTO,
    pub user_did: UserDid,
    pub event_date: String,
    /// `None` when the stored payload does not match `record_type`.
    pub content: Option<RecordContentDTO>,
    pub canister_id: String,
    pub submitted_at: Option<OffsetDateTime>,
    pub status: RecordStatusDTO,
    pub reward_amount: Option<u64>,
}

/// Admin search filter. Unset fields match everything.
#[derive(Clone, Debug, Default)]
pub struct RecordSearchQueryDTO {
    pub institution_id: Option<InstitutionId>,
    pub user_did: Option<UserDid>,
    pub record_type: Option<RecordTypeDTO>,
    pub status: Option<RecordStatusDTO>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InstitutionRecordsListDTO {
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub user_did: UserDid,
    pub records: Vec<CreditRecordResponseDTO>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From)]
#[from(RecordStatistics)]
pub struct RecordStatisticsDTO {
    pub total_records: u64,
    pub pending_records: u64,
    pub confirmed_records: u64,
    pub rejected_records: u64,
    pub total_rewards: u64,
}
