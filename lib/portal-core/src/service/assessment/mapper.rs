use super::dto::AssessmentReportDTO;
use crate::proto::assessment::RiskAssessmentReport;
use crate::util::timestamp::from_ledger_ns;

impl From<RiskAssessmentReport> for AssessmentReportDTO {
    fn from(value: RiskAssessmentReport) -> Self {
        Self {
            report_id: value.report_id,
            user_did: value.user_did,
            institution_id: value.institution_id,
            assessment: value.assessment.into(),
            created_at: from_ledger_ns(value.created_at),
        }
    }
}
