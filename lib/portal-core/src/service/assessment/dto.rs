use one_dto_mapper::From;
use shared_types::{InstitutionId, ReportId, UserDid};
use time::OffsetDateTime;

use crate::proto::assessment::RiskAssessment;

/// Scoring summary for one subject.
#[derive(Clone, Debug, PartialEq, From)]
#[from(RiskAssessment)]
pub struct RiskAssessmentDTO {
    pub credit_score: u32,
    pub risk_level: String,
    pub assessment_details: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentReportDTO {
    pub report_id: ReportId,
    pub user_did: UserDid,
    pub institution_id: InstitutionId,
    pub assessment: RiskAssessmentDTO,
    pub created_at: Option<OffsetDateTime>,
}
