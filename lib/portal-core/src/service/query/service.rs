use shared_types::{InstitutionId, RecordId, UserDid};

use super::QueryService;
use super::dto::{
    CreditRecordResponseDTO, InstitutionRecordsListDTO, RecordSearchQueryDTO, RecordStatisticsDTO,
};
use super::mapper::search_query_to_params;
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};

impl QueryService {
    pub async fn query_records(
        &self,
        query: RecordSearchQueryDTO,
    ) -> Result<Vec<CreditRecordResponseDTO>, ServiceError> {
        let records = self
            .ledger_client
            .query_records(search_query_to_params(query)?)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn query_records_by_user_did(
        &self,
        user_did: UserDid,
    ) -> Result<Vec<CreditRecordResponseDTO>, ServiceError> {
        if user_did.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyUserDid.into());
        }

        let records = self.ledger_client.query_records_by_user_did(user_did).await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get_record_detail(
        &self,
        record_id: RecordId,
    ) -> Result<CreditRecordResponseDTO, ServiceError> {
        if record_id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyRecordId.into());
        }

        let caller = self.current_institution()?;
        let record = self
            .ledger_client
            .query_record_by_id(record_id, caller)
            .await?;

        Ok(record.into())
    }

    /// Charges one query token against the target institution, then fetches
    /// its records for the subject. A declined charge stops the query before
    /// any record data is requested.
    pub async fn query_institution_records(
        &self,
        institution_id: InstitutionId,
        user_did: UserDid,
    ) -> Result<InstitutionRecordsListDTO, ServiceError> {
        if user_did.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyUserDid.into());
        }

        let charged = self
            .ledger_client
            .deduct_query_token(institution_id.clone(), user_did.clone())
            .await?;
        if !charged {
            return Err(BusinessLogicError::QueryTokenDeclined(user_did).into());
        }

        let response = self
            .ledger_client
            .query_institution_records_list(institution_id, user_did)
            .await?;

        Ok(response.into())
    }

    /// The caller's own submissions for one subject, no token charge.
    pub async fn list_submitted_records(
        &self,
        user_did: UserDid,
    ) -> Result<InstitutionRecordsListDTO, ServiceError> {
        if user_did.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyUserDid.into());
        }

        let institution_id = self.current_institution()?;
        let response = self
            .ledger_client
            .query_institution_records_list(institution_id, user_did)
            .await?;

        Ok(response.into())
    }

    pub async fn list_failed_records(&self) -> Result<InstitutionRecordsListDTO, ServiceError> {
        let institution_id = self.current_institution()?;
        let response = self
            .ledger_client
            .query_institution_records_failed_list(institution_id)
            .await?;

        Ok(response.into())
    }

    /// Record counters, either platform-wide (`None`) or for one institution.
    pub async fn get_record_statistics(
        &self,
        institution_id: Option<InstitutionId>,
    ) -> Result<RecordStatisticsDTO, ServiceError> {
        let statistics = self
            .ledger_client
            .get_record_statistics(institution_id)
            .await?;

        Ok(statistics.into())
    }

    fn current_institution(&self) -> Result<InstitutionId, ServiceError> {
        self.session_provider
            .session()
            .and_then(|session| session.institution_id)
            .ok_or_else(|| BusinessLogicError::NoActiveSession.into())
    }
}
