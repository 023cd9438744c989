use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use shared_types::{InstitutionId, UserDid};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub passed: bool,
    pub reason: Option<String>,
}

/// One entry of an institution's upload history.
///
/// `status` and `submitted_at` are free-form text on the wire; the service
/// layer parses them into typed values where it can.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub id: String,
    pub user_did: UserDid,
    pub institution_id: InstitutionId,
    pub status: String,
    pub submitted_at: String,
    pub review_result: ReviewResult,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryQueryParams {
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadHistoryResponse {
    pub data: Vec<UploadRecord>,
    pub total: u64,
}
