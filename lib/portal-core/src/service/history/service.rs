use shared_types::{InstitutionId, RecordId};

use super::HistoryService;
use super::dto::{HistoryQueryDTO, UploadHistoryDTO, UploadRecordDTO};
use super::mapper::history_query_to_params;
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};

impl HistoryService {
    /// Upload history of the signed-in institution, filtered by status
    /// and date range.
    pub async fn get_upload_history(
        &self,
        query: HistoryQueryDTO,
    ) -> Result<UploadHistoryDTO, ServiceError> {
        let institution_id = self.current_institution()?;
        let params = history_query_to_params(query)?;

        self.ledger_client
            .get_upload_history(institution_id, params)
            .await
            .map(Into::into)
            .map_err(Into::into)
    }

    /// Asks the ledger to take another pass at a failed upload.
    pub async fn retry_upload(
        &self,
        record_id: RecordId,
    ) -> Result<UploadRecordDTO, ServiceError> {
        if record_id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyRecordId.into());
        }
        let institution_id = self.current_institution()?;

        let record = self
            .ledger_client
            .retry_upload(institution_id, record_id)
            .await?;

        tracing::info!(upload_id = %record.id, status = %record.status, "upload retried");
        Ok(record.into())
    }

    fn current_institution(&self) -> Result<InstitutionId, ServiceError> {
        self.session_provider
            .session()
            .and_then(|session| session.institution_id)
            .ok_or_else(|| BusinessLogicError::NoActiveSession.into())
    }
}
