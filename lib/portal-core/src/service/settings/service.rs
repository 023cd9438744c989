use shared_types::InstitutionId;

use super::SettingsService;
use super::dto::ServiceSettingsDTO;
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};

impl SettingsService {
    /// Data service settings of the signed-in institution.
    pub async fn get_settings(&self) -> Result<ServiceSettingsDTO, ServiceError> {
        let institution_id = self.current_institution()?;

        self.ledger_client
            .get_service_settings(institution_id)
            .await
            .map(Into::into)
            .map_err(Into::into)
    }

    pub async fn update_settings(&self, settings: ServiceSettingsDTO) -> Result<(), ServiceError> {
        if settings.reward_share_ratio > 100 {
            return Err(ValidationError::InvalidRewardShareRatio.into());
        }
        let institution_id = self.current_institution()?;

        self.ledger_client
            .update_service_settings(institution_id.clone(), settings.into())
            .await?;

        tracing::info!(%institution_id, "service settings updated");
        Ok(())
    }

    fn current_institution(&self) -> Result<InstitutionId, ServiceError> {
        self.session_provider
            .session()
            .and_then(|session| session.institution_id)
            .ok_or_else(|| BusinessLogicError::NoActiveSession.into())
    }
}
