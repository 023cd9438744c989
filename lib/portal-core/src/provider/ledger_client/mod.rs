pub mod connector;
pub mod http_client;

use shared_types::{InstitutionId, RecordId, UserDid};
use thiserror::Error;

use crate::proto::assessment::{AssessmentListResponse, RiskAssessment};
use crate::proto::deduction::{CreateDeductionRequest, CreditDeductionRecord};
use crate::proto::history::{HistoryQueryParams, UploadHistoryResponse, UploadRecord};
use crate::proto::institution::{Institution, LoginRequest, LoginResponse, RegisterRequest};
use crate::proto::record::{
    BatchSubmissionRequest, BatchSubmissionResponse, CreditRecord, InstitutionRecordsResponse,
    RecordQueryParams, RecordStatistics, RecordSubmissionRequest, RecordSubmissionResponse,
};
use crate::proto::settings::ServiceSettings;
use crate::proto::token::DccTransactionRequest;

#[derive(Debug, Error)]
pub enum LedgerClientError {
    #[error("Ledger transport error: {0}")]
    Transport(#[from] anyhow::Error),
    /// The service processed the call and answered with its `Err` variant.
    /// The message is passed through verbatim.
    #[error("Ledger rejected the call: {0}")]
    Application(String),
    #[error("Malformed ledger reply: {0}")]
    MalformedReply(String),
}

/// Typed binding of the credit service interface.
///
/// One method per remote operation; methods translate between Rust values
/// and the wire shapes but never interpret domain data beyond unwrapping the
/// reply envelope.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait LedgerClient: Send + Sync {
    async fn register_institution(
        &self,
        request: RegisterRequest,
    ) -> Result<InstitutionId, LedgerClientError>;

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, LedgerClientError>;

    async fn change_password(
        &self,
        old_password: String,
        new_password: String,
    ) -> Result<(), LedgerClientError>;

    async fn reset_password(
        &self,
        institution_id: InstitutionId,
    ) -> Result<String, LedgerClientError>;

    async fn get_institution(
        &self,
        institution_id: InstitutionId,
    ) -> Result<Option<Institution>, LedgerClientError>;

    async fn get_all_institutions(&self) -> Result<Vec<Institution>, LedgerClientError>;

    async fn update_institution_status(
        &self,
        institution_id: InstitutionId,
        is_active: bool,
    ) -> Result<(), LedgerClientError>;

    async fn update_credit_score(
        &self,
        institution_id: InstitutionId,
        score: u64,
    ) -> Result<(), LedgerClientError>;

    async fn record_api_call(
        &self,
        institution_id: InstitutionId,
        count: u64,
    ) -> Result<(), LedgerClientError>;

    async fn record_data_upload(
        &self,
        institution_id: InstitutionId,
        count: u64,
    ) -> Result<(), LedgerClientError>;

    async fn record_token_trading(
        &self,
        institution_id: InstitutionId,
        is_purchase: bool,
        amount: u64,
    ) -> Result<(), LedgerClientError>;

    async fn recharge_dcc(
        &self,
        institution_id: InstitutionId,
        request: DccTransactionRequest,
    ) -> Result<(), LedgerClientError>;

    async fn deduct_dcc(
        &self,
        institution_id: InstitutionId,
        request: DccTransactionRequest,
    ) -> Result<(), LedgerClientError>;

    async fn submit_record(
        &self,
        request: RecordSubmissionRequest,
    ) -> Result<RecordSubmissionResponse, LedgerClientError>;

    async fn submit_records_batch(
        &self,
        request: BatchSubmissionRequest,
    ) -> Result<BatchSubmissionResponse, LedgerClientError>;

    async fn query_records(
        &self,
        params: RecordQueryParams,
    ) -> Result<Vec<CreditRecord>, LedgerClientError>;

    async fn query_records_by_user_did(
        &self,
        user_did: UserDid,
    ) -> Result<Vec<CreditRecord>, LedgerClientError>;

    async fn query_record_by_id(
        &self,
        record_id: RecordId,
        caller: InstitutionId,
    ) -> Result<CreditRecord, LedgerClientError>;

    async fn query_institution_records_list(
        &self,
        institution_id: InstitutionId,
        user_did: UserDid,
    ) -> Result<InstitutionRecordsResponse, LedgerClientError>;

    async fn query_institution_records_failed_list(
        &self,
        institution_id: InstitutionId,
    ) -> Result<InstitutionRecordsResponse, LedgerClientError>;

    async fn get_record_statistics(
        &self,
        institution_id: Option<InstitutionId>,
    ) -> Result<RecordStatistics, LedgerClientError>;

    async fn create_credit_deduction(
        &self,
        request: CreateDeductionRequest,
    ) -> Result<CreditDeductionRecord, LedgerClientError>;

    async fn get_credit_deductions(
        &self,
        institution_id: Option<InstitutionId>,
    ) -> Result<Vec<CreditDeductionRecord>, LedgerClientError>;

    async fn deduct_query_token(
        &self,
        institution_id: InstitutionId,
        user_did: UserDid,
    ) -> Result<bool, LedgerClientError>;

    async fn get_risk_assessment(
        &self,
        institution_id: InstitutionId,
        user_did: UserDid,
    ) -> Result<RiskAssessment, LedgerClientError>;

    async fn query_assessment_reports(
        &self,
        institution_id: InstitutionId,
        days: Option<u64>,
    ) -> Result<AssessmentListResponse, LedgerClientError>;

    async fn get_service_settings(
        &self,
        institution_id: InstitutionId,
    ) -> Result<ServiceSettings, LedgerClientError>;

    async fn update_service_settings(
        &self,
        institution_id: InstitutionId,
        settings: ServiceSettings,
    ) -> Result<(), LedgerClientError>;

    async fn get_upload_history(
        &self,
        institution_id: InstitutionId,
        params: HistoryQueryParams,
    ) -> Result<UploadHistoryResponse, LedgerClientError>;

    async fn retry_upload(
        &self,
        institution_id: InstitutionId,
        record_id: RecordId,
    ) -> Result<UploadRecord, LedgerClientError>;
}
