use shared_types::{LoanId, RecordId, UserDid};
use time::{Date, OffsetDateTime};

use crate::service::query::dto::RecordStatusDTO;

/// One credit event as captured on the submission form.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitRecordRequestDTO {
    pub user_did: UserDid,
    pub event_date: Date,
    pub content: SubmissionContentDTO,
}

/// Type-specific part of a submission. The variant decides the record type
/// sent to the ledger.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionContentDTO {
    Loan {
        amount: f64,
        term_months: u64,
        interest_rate: f64,
    },
    Repayment {
        amount: f64,
        original_loan_id: LoanId,
    },
    Notification {
        amount: f64,
        days: u64,
        /// Falls back to `amount` when the form leaves it empty.
        period_amount: Option<f64>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionReceiptDTO {
    pub record_id: RecordId,
    pub status: RecordStatusDTO,
    pub submitted_at: Option<OffsetDateTime>,
    pub reward_amount: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BatchSubmissionReceiptDTO {
    pub submitted: u64,
    pub failed: u64,
    pub records: Vec<SubmissionReceiptDTO>,
}
