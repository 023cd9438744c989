use shared_types::{InstitutionId, UserDid};

use super::AssessmentService;
use super::dto::{AssessmentReportDTO, RiskAssessmentDTO};
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};

const DEFAULT_REPORT_WINDOW_DAYS: u64 = 30;

impl AssessmentService {
    /// Scores one subject on demand. The ledger builds the assessment from
    /// the records the caller has submitted for them.
    pub async fn get_risk_assessment(
        &self,
        user_did: UserDid,
    ) -> Result<RiskAssessmentDTO, ServiceError> {
        if user_did.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyUserDid.into());
        }
        let institution_id = self.current_institution()?;

        self.ledger_client
            .get_risk_assessment(institution_id, user_did)
            .await
            .map(Into::into)
            .map_err(Into::into)
    }

    /// Assessment reports generated for the signed-in institution within
    /// the given window, thirty days when unset.
    pub async fn list_reports(
        &self,
        days: Option<u64>,
    ) -> Result<Vec<AssessmentReportDTO>, ServiceError> {
        let institution_id = self.current_institution()?;
        let window = days.unwrap_or(DEFAULT_REPORT_WINDOW_DAYS);

        let response = self
            .ledger_client
            .query_assessment_reports(institution_id, Some(window))
            .await?;

        Ok(response.data.into_iter().map(Into::into).collect())
    }

    fn current_institution(&self) -> Result<InstitutionId, ServiceError> {
        self.session_provider
            .session()
            .and_then(|session| session.institution_id)
            .ok_or_else(|| BusinessLogicError::NoActiveSession.into())
    }
}
