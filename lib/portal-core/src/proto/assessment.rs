use serde::{Deserialize, Serialize};
use shared_types::{InstitutionId, ReportId, UserDid};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub credit_score: u32,
    pub risk_level: String,
    pub assessment_details: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentReport {
    pub report_id: ReportId,
    pub user_did: UserDid,
    pub institution_id: InstitutionId,
    pub assessment: RiskAssessment,
    /// Nanoseconds since the Unix epoch.
    pub created_at: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentListResponse {
    pub status: String,
    pub message: Option<String>,
    pub data: Vec<RiskAssessmentReport>,
}
