use shared_types::InstitutionId;

use super::dto::{
    InstitutionLoginRequestDTO, InstitutionLoginResponseDTO, InstitutionResponseDTO,
    InstitutionStatusDTO, RegisterInstitutionRequestDTO,
};
use super::InstitutionService;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl InstitutionService {
    pub async fn register_institution(
        &self,
        request: RegisterInstitutionRequestDTO,
    ) -> Result<InstitutionId, ServiceError> {
        let institution_id = self
            .ledger_client
            .register_institution(request.into())
            .await?;

        tracing::info!(%institution_id, "institution registered");

        Ok(institution_id)
    }

    /// Authenticates against the portal login operation and, on success,
    /// upgrades the pending session with the institution attribution.
    pub async fn login(
        &self,
        request: InstitutionLoginRequestDTO,
    ) -> Result<InstitutionLoginResponseDTO, ServiceError> {
        let name = request.name.clone();

        let response = self.ledger_client.login(request.into()).await?;
        if !response.success {
            return Err(BusinessLogicError::LoginRejected {
                reason: response.message,
            }
            .into());
        }

        let institution_id = response.institution_id.ok_or_else(|| {
            ServiceError::ResponseMapping("login reply is missing the institution id".to_string())
        })?;

        self.session_manager
            .establish_institution(institution_id.clone(), name)?;

        tracing::info!(%institution_id, "institution login accepted");

        Ok(InstitutionLoginResponseDTO {
            institution_id,
            full_name: response.full_name,
        })
    }

    pub async fn get_institution(
        &self,
        institution_id: InstitutionId,
    ) -> Result<InstitutionResponseDTO, ServiceError> {
        let institution = self
            .ledger_client
            .get_institution(institution_id.clone())
            .await?
            .ok_or(ServiceError::EntityNotFound(
                EntityNotFoundError::Institution(institution_id),
            ))?;

        Ok(institution.into())
    }

    pub async fn list_institutions(&self) -> Result<Vec<InstitutionResponseDTO>, ServiceError> {
        let institutions = self.ledger_client.get_all_institutions().await?;

        Ok(institutions.into_iter().map(Into::into).collect())
    }

    pub async fn update_institution_status(
        &self,
        institution_id: InstitutionId,
        status: InstitutionStatusDTO,
    ) -> Result<(), ServiceError> {
        self.ledger_client
            .update_institution_status(institution_id, status == InstitutionStatusDTO::Active)
            .await
            .map_err(Into::into)
    }

    pub async fn update_credit_score(
        &self,
        institution_id: InstitutionId,
        score: u64,
    ) -> Result<(), ServiceError> {
        self.ledger_client
            .update_credit_score(institution_id, score)
            .await
            .map_err(Into::into)
    }

    pub async fn change_password(
        &self,
        old_password: String,
        new_password: String,
    ) -> Result<(), ServiceError> {
        self.ledger_client
            .change_password(old_password, new_password)
            .await
            .map_err(Into::into)
    }

    /// Admin operation. The reply carries the newly generated password so the
    /// console can hand it to the institution out of band.
    pub async fn reset_password(
        &self,
        institution_id: InstitutionId,
    ) -> Result<String, ServiceError> {
        self.ledger_client
            .reset_password(institution_id)
            .await
            .map_err(Into::into)
    }
}
