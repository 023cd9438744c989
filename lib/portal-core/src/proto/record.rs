use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use shared_types::{InstitutionId, LoanId, RecordId, UserDid};

/// Record categories recognised by the ledger.
///
/// Earlier interface revisions used `Overdue` for what is now
/// `NotificationRecord`; the alias is accepted on input so stored records
/// from that era still parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    LoanRecord,
    RepaymentRecord,
    #[serde(alias = "Overdue")]
    NotificationRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Pending,
    Confirmed,
    #[serde(alias = "Failed")]
    Rejected,
}

/// Payload of a credit record, tagged by kind.
///
/// `amount` and `period_amount` are integer minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordContent {
    Loan(LoanContent),
    Repayment(RepaymentContent),
    #[serde(alias = "Overdue")]
    Notification(NotificationContent),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanContent {
    pub amount: u64,
    pub loan_id: LoanId,
    pub term_months: u64,
    pub interest_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentContent {
    pub amount: u64,
    pub loan_id: LoanId,
    pub repayment_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub amount: u64,
    pub days: u64,
    pub period_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRecord {
    pub id: RecordId,
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub institution_full_name: String,
    pub record_type: RecordType,
    pub user_did: UserDid,
    /// Day the underlying event happened, `YYYY-MM-DD`.
    pub event_date: String,
    pub content: RecordContent,
    pub encrypted_content: Vec<u8>,
    pub proof: Vec<u8>,
    pub canister_id: String,
    /// Submission time in nanoseconds since the Unix epoch.
    pub timestamp: u64,
    pub status: RecordStatus,
    pub reward_amount: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSubmissionRequest {
    pub institution_id: InstitutionId,
    pub record_type: RecordType,
    pub user_did: UserDid,
    pub event_date: String,
    pub content: RecordContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSubmissionResponse {
    pub record_id: RecordId,
    pub status: RecordStatus,
    pub timestamp: u64,
    pub reward_amount: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSubmissionRequest {
    pub records: Vec<RecordSubmissionRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSubmissionResponse {
    pub submitted: u64,
    pub failed: u64,
    pub records: Vec<RecordSubmissionResponse>,
}

/// Search filter for `query_records`. Empty fields match everything.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordQueryParams {
    pub institution_id: Option<InstitutionId>,
    pub user_did: Option<UserDid>,
    pub record_type: Option<RecordType>,
    pub status: Option<RecordStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStatistics {
    pub total_records: u64,
    pub pending_records: u64,
    pub confirmed_records: u64,
    pub rejected_records: u64,
    pub total_rewards: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRecordsResponse {
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub user_did: UserDid,
    pub records: Vec<CreditRecord>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_content_is_externally_tagged() {
        let content = RecordContent::Loan(LoanContent {
            amount: 10_000_000,
            loan_id: "LOAN2024032400042".into(),
            term_months: 12,
            interest_rate: 4.35,
        });

        let json = serde_json::to_value(&content).unwrap();
        assert!(json.get("Loan").is_some());
        assert_eq!(json["Loan"]["amount"], 10_000_000);
    }

    #[test]
    fn test_legacy_tags_still_parse() {
        let record_type: RecordType = serde_json::from_str(r#""Overdue""#).unwrap();
        assert_eq!(record_type, RecordType::NotificationRecord);

        let status: RecordStatus = serde_json::from_str(r#""Failed""#).unwrap();
        assert_eq!(status, RecordStatus::Rejected);

        let content: RecordContent = serde_json::from_str(
            r#"{"Overdue": {"amount": 200000, "days": 30, "period_amount": 200000}}"#,
        )
        .unwrap();
        assert_eq!(
            content,
            RecordContent::Notification(NotificationContent {
                amount: 200_000,
                days: 30,
                period_amount: 200_000,
            })
        );
    }

    #[test]
    fn test_query_params_omit_empty_fields() {
        let json = serde_json::to_value(RecordQueryParams::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
