use rand::Rng;
use serde::Deserialize;
use shared_types::{InstitutionId, LoanId};
use time::Date;
use time::macros::format_description;

use super::dto::{
    BatchSubmissionReceiptDTO, SubmissionContentDTO, SubmissionReceiptDTO, SubmitRecordRequestDTO,
};
use crate::proto::record::{
    BatchSubmissionResponse, LoanContent, NotificationContent, RecordContent,
    RecordSubmissionRequest, RecordSubmissionResponse, RecordType, RepaymentContent,
};
use crate::service::error::{ServiceError, ValidationError};
use crate::util::amount::to_minor_units;
use crate::util::timestamp::from_ledger_ns;

const EVENT_DATE_FORMAT: &[time::format_description::FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// One spreadsheet line. Column names follow the upload template, values
/// stay untyped so that conversion failures can name the offending row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordRow {
    record_type: String,
    user_did: String,
    event_date: String,
    amount: String,
    #[serde(default)]
    term: String,
    #[serde(default)]
    interest_rate: String,
    #[serde(default)]
    original_loan_id: String,
    #[serde(default)]
    overdue_days: String,
}

pub(super) fn submissions_from_csv(
    bytes: &[u8],
) -> Result<Vec<SubmitRecordRequestDTO>, ServiceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(bytes);

    let mut submissions = vec![];
    for (index, row) in reader.deserialize::<RecordRow>().enumerate() {
        let row = row.map_err(|error| ValidationError::MalformedCsv(error.to_string()))?;
        submissions.push(row_to_submission(row, index + 1)?);
    }
    Ok(submissions)
}

fn row_to_submission(
    row: RecordRow,
    row_number: usize,
) -> Result<SubmitRecordRequestDTO, ServiceError> {
    if row.user_did.is_empty() {
        return Err(row_error(row_number, "userDid is required"));
    }

    let event_date = Date::parse(&row.event_date, EVENT_DATE_FORMAT).map_err(|_| {
        row_error(
            row_number,
            format!("invalid eventDate `{}`, expected YYYY-MM-DD", row.event_date),
        )
    })?;
    let amount = parse_positive_amount(&row.amount, row_number)?;

    let content = match row.record_type.to_lowercase().as_str() {
        "loan" => {
            let term_months = row
                .term
                .parse::<u64>()
                .ok()
                .filter(|term| *term > 0)
                .ok_or_else(|| row_error(row_number, "term must be a positive number of months"))?;
            let interest_rate = row
                .interest_rate
                .parse::<f64>()
                .ok()
                .filter(|rate| rate.is_finite() && *rate >= 0.0)
                .ok_or_else(|| {
                    row_error(row_number, "interestRate must be a non-negative number")
                })?;
            SubmissionContentDTO::Loan {
                amount,
                term_months,
                interest_rate,
            }
        }
        "repayment" => {
            if row.original_loan_id.is_empty() {
                return Err(row_error(
                    row_number,
                    "originalLoanId is required for repayment records",
                ));
            }
            SubmissionContentDTO::Repayment {
                amount,
                original_loan_id: row.original_loan_id.into(),
            }
        }
        // `overdue` is the spreadsheet-facing name for notification records.
        "notification" | "overdue" => {
            let days = row
                .overdue_days
                .parse::<u64>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or_else(|| row_error(row_number, "overdueDays must be a positive number"))?;
            SubmissionContentDTO::Notification {
                amount,
                days,
                period_amount: None,
            }
        }
        other => {
            return Err(row_error(
                row_number,
                format!("unknown record type `{other}`"),
            ));
        }
    };

    Ok(SubmitRecordRequestDTO {
        user_did: row.user_did.into(),
        event_date,
        content,
    })
}

pub(super) fn submission_to_wire(
    request: SubmitRecordRequestDTO,
    institution_id: InstitutionId,
) -> Result<RecordSubmissionRequest, ServiceError> {
    let event_date = request
        .event_date
        .format(EVENT_DATE_FORMAT)
        .map_err(|error| ServiceError::MappingError(error.to_string()))?;

    let (record_type, content) = match request.content {
        SubmissionContentDTO::Loan {
            amount,
            term_months,
            interest_rate,
        } => (
            RecordType::LoanRecord,
            RecordContent::Loan(LoanContent {
                amount: wire_amount(amount)?,
                loan_id: generate_loan_id(request.event_date),
                term_months,
                interest_rate,
            }),
        ),
        SubmissionContentDTO::Repayment {
            amount,
            original_loan_id,
        } => (
            RecordType::RepaymentRecord,
            RecordContent::Repayment(RepaymentContent {
                amount: wire_amount(amount)?,
                loan_id: original_loan_id,
                repayment_date: event_date.clone(),
            }),
        ),
        SubmissionContentDTO::Notification {
            amount,
            days,
            period_amount,
        } => (
            RecordType::NotificationRecord,
            RecordContent::Notification(NotificationContent {
                amount: wire_amount(amount)?,
                days,
                period_amount: wire_amount(period_amount.unwrap_or(amount))?,
            }),
        ),
    };

    Ok(RecordSubmissionRequest {
        institution_id,
        record_type,
        user_did: request.user_did,
        event_date,
        content,
    })
}

/// Loan ids carry the event date and a five digit serial, for example
/// `LOAN2024032400042`.
fn generate_loan_id(event_date: Date) -> LoanId {
    let serial = rand::thread_rng().gen_range(0..100_000u32);
    format!(
        "LOAN{:04}{:02}{:02}{serial:05}",
        event_date.year(),
        u8::from(event_date.month()),
        event_date.day()
    )
    .into()
}

fn wire_amount(amount: f64) -> Result<u64, ServiceError> {
    to_minor_units(amount).ok_or_else(|| ValidationError::InvalidAmount(amount.to_string()).into())
}

fn parse_positive_amount(value: &str, row_number: usize) -> Result<f64, ServiceError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or_else(|| row_error(row_number, format!("invalid amount `{value}`")))
}

fn row_error(row: usize, reason: impl Into<String>) -> ServiceError {
    ValidationError::InvalidRecordRow {
        row,
        reason: reason.into(),
    }
    .into()
}

impl From<RecordSubmissionResponse> for SubmissionReceiptDTO {
    fn from(value: RecordSubmissionResponse) -> Self {
        Self {
            record_id: value.record_id,
            status: value.status.into(),
            submitted_at: from_ledger_ns(value.timestamp),
            reward_amount: value.reward_amount,
        }
    }
}

impl From<BatchSubmissionResponse> for BatchSubmissionReceiptDTO {
    fn from(value: BatchSubmissionResponse) -> Self {
        Self {
            submitted: value.submitted,
            failed: value.failed,
            records: value.records.into_iter().map(Into::into).collect(),
        }
    }
}
