use shared_types::InstitutionId;
use time::{OffsetDateTime, Time};

use super::DashboardService;
use super::dto::{AdminDashboardDTO, InstitutionDashboardDTO};
use super::mapper;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl DashboardService {
    /// Counters for the admin console landing page.
    pub async fn admin_overview(&self) -> Result<AdminDashboardDTO, ServiceError> {
        let institutions = self.ledger_client.get_all_institutions().await?;
        let today_start = OffsetDateTime::now_utc().replace_time(Time::MIDNIGHT);

        Ok(mapper::admin_overview(&institutions, today_start))
    }

    /// Overview tiles for the signed-in institution.
    pub async fn institution_overview(&self) -> Result<InstitutionDashboardDTO, ServiceError> {
        let institution_id = self.current_institution()?;
        let institution = self
            .ledger_client
            .get_institution(institution_id.clone())
            .await?
            .ok_or(ServiceError::EntityNotFound(
                EntityNotFoundError::Institution(institution_id),
            ))?;

        Ok(mapper::institution_overview(institution))
    }

    fn current_institution(&self) -> Result<InstitutionId, ServiceError> {
        self.session_provider
            .session()
            .and_then(|session| session.institution_id)
            .ok_or_else(|| BusinessLogicError::NoActiveSession.into())
    }
}
