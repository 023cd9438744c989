use shared_types::InstitutionId;

use super::DeductionService;
use super::dto::{CreateDeductionRequestDTO, CreditDeductionResponseDTO};
use crate::service::error::{ServiceError, ValidationError};

impl DeductionService {
    /// Issues a score deduction against an institution. The ledger stamps
    /// the acting operator onto the stored record.
    pub async fn create_deduction(
        &self,
        request: CreateDeductionRequestDTO,
    ) -> Result<CreditDeductionResponseDTO, ServiceError> {
        if request.deduction_points == 0
            || request.reason.trim().is_empty()
            || request.data_quality_issue.trim().is_empty()
        {
            return Err(ValidationError::IncompleteDeductionForm.into());
        }

        let record = self
            .ledger_client
            .create_credit_deduction(request.into())
            .await?;

        tracing::info!(
            institution_id = %record.institution_id,
            points = record.deduction_points,
            "credit deduction recorded"
        );
        Ok(record.into())
    }

    /// Deduction history, optionally narrowed to one institution.
    pub async fn list_deductions(
        &self,
        institution_id: Option<InstitutionId>,
    ) -> Result<Vec<CreditDeductionResponseDTO>, ServiceError> {
        self.ledger_client
            .get_credit_deductions(institution_id)
            .await
            .map(|records| records.into_iter().map(Into::into).collect())
            .map_err(Into::into)
    }
}
