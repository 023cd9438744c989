use serde::{Deserialize, Serialize};
use shared_types::{InstitutionId, OperatorId};

/// Credit deduction issued by an administrator against an institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditDeductionRecord {
    pub id: String,
    pub record_id: String,
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub deduction_points: u32,
    pub reason: String,
    pub data_quality_issue: String,
    /// Nanoseconds since the Unix epoch.
    pub created_at: u64,
    pub operator_id: OperatorId,
    pub operator_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDeductionRequest {
    pub institution_id: InstitutionId,
    pub deduction_points: u32,
    pub reason: String,
    pub data_quality_issue: String,
}
