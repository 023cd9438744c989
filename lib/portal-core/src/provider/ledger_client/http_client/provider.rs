use serde_json::json;
use shared_types::{InstitutionId, RecordId, UserDid};

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
use crate::provider::ledger_client::http_client::{CallMode, HttpLedgerClient};
use crate::provider::ledger_client::{LedgerClient, LedgerClientError};

#[async_trait::async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn register_institution(
        &self,
        request: RegisterRequest,
    ) -> Result<InstitutionId, LedgerClientError> {
        self.call_enveloped(CallMode::Call, "register_institution", json!([request]))
            .await
    }

    // `login` also exists on the wire with the same shape; `institution_login`
    // is the one the service kept current.
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, LedgerClientError> {
        self.call_plain(CallMode::Call, "institution_login", json!([request]))
            .await
    }

    async fn change_password(
        &self,
        old_password: String,
        new_password: String,
    ) -> Result<(), LedgerClientError> {
        self.call_enveloped(
            CallMode::Call,
            "change_password",
            json!([old_password, new_password]),
        )
        .await
    }

    async fn reset_password(
        &self,
        institution_id: InstitutionId,
    ) -> Result<String, LedgerClientError> {
        self.call_enveloped(CallMode::Call, "reset_password", json!([institution_id]))
            .await
    }

    async fn get_institution(
        &self,
        institution_id: InstitutionId,
    ) -> Result<Option<Institution>, LedgerClientError> {
        self.call_plain(CallMode::Query, "get_institution", json!([institution_id]))
            .await
    }

    async fn get_all_institutions(&self) -> Result<Vec<Institution>, LedgerClientError> {
        self.call_list(CallMode::Query, "get_all_institutions", json!([]))
            .await
    }

    async fn update_institution_status(
        &self,
        institution_id: InstitutionId,
        is_active: bool,
    ) -> Result<(), LedgerClientError> {
        self.call_void(
            CallMode::Call,
            "update_institution_status",
            json!([institution_id, is_active]),
        )
        .await
    }

    async fn update_credit_score(
        &self,
        institution_id: InstitutionId,
        score: u64,
    ) -> Result<(), LedgerClientError> {
        self.call_void(
            CallMode::Call,
            "update_credit_score",
            json!([institution_id, score]),
        )
        .await
    }

    async fn record_api_call(
        &self,
        institution_id: InstitutionId,
        count: u64,
    ) -> Result<(), LedgerClientError> {
        self.call_void(
            CallMode::Call,
            "record_api_call",
            json!([institution_id, count]),
        )
        .await
    }

    async fn record_data_upload(
        &self,
        institution_id: InstitutionId,
        count: u64,
    ) -> Result<(), LedgerClientError> {
        self.call_void(
            CallMode::Call,
            "record_data_upload",
            json!([institution_id, count]),
        )
        .await
    }

    async fn record_token_trading(
        &self,
        institution_id: InstitutionId,
        is_purchase: bool,
        amount: u64,
    ) -> Result<(), LedgerClientError> {
        self.call_void(
            CallMode::Call,
            "record_token_trading",
            json!([institution_id, is_purchase, amount]),
        )
        .await
    }

    async fn recharge_dcc(
        &self,
        institution_id: InstitutionId,
        request: DccTransactionRequest,
    ) -> Result<(), LedgerClientError> {
        self.call_enveloped(
            CallMode::Call,
            "recharge_dcc",
            json!([institution_id, request]),
        )
        .await
    }

    async fn deduct_dcc(
        &self,
        institution_id: InstitutionId,
        request: DccTransactionRequest,
    ) -> Result<(), LedgerClientError> {
        self.call_enveloped(CallMode::Call, "deduct_dcc", json!([institution_id, request]))
            .await
    }

    async fn submit_record(
        &self,
        request: RecordSubmissionRequest,
    ) -> Result<RecordSubmissionResponse, LedgerClientError> {
        self.call_enveloped(CallMode::Call, "submit_record", json!([request]))
            .await
    }

    async fn submit_records_batch(
        &self,
        request: BatchSubmissionRequest,
    ) -> Result<BatchSubmissionResponse, LedgerClientError> {
        self.call_enveloped(CallMode::Call, "submit_records_batch", json!([request]))
            .await
    }

    async fn query_records(
        &self,
        params: RecordQueryParams,
    ) -> Result<Vec<CreditRecord>, LedgerClientError> {
        self.call_list(CallMode::Query, "query_records", json!([params]))
            .await
    }

    async fn query_records_by_user_did(
        &self,
        user_did: UserDid,
    ) -> Result<Vec<CreditRecord>, LedgerClientError> {
        self.call_list(
            CallMode::Query,
            "query_records_by_user_did",
            json!([user_did]),
        )
        .await
    }

    async fn query_record_by_id(
        &self,
        record_id: RecordId,
        caller: InstitutionId,
    ) -> Result<CreditRecord, LedgerClientError> {
        self.call_enveloped(
            CallMode::Query,
            "query_record_by_id",
            json!([record_id, caller]),
        )
        .await
    }

    async fn query_institution_records_list(
        &self,
        institution_id: InstitutionId,
        user_did: UserDid,
    ) -> Result<InstitutionRecordsResponse, LedgerClientError> {
        self.call_enveloped(
            CallMode::Call,
            "query_institution_records_list",
            json!([institution_id, user_did]),
        )
        .await
    }

    async fn query_institution_records_failed_list(
        &self,
        institution_id: InstitutionId,
    ) -> Result<InstitutionRecordsResponse, LedgerClientError> {
        self.call_enveloped(
            CallMode::Call,
            "query_institution_records_failed_list",
            json!([institution_id]),
        )
        .await
    }

    async fn get_record_statistics(
        &self,
        institution_id: Option<InstitutionId>,
    ) -> Result<RecordStatistics, LedgerClientError> {
        self.call_enveloped(
            CallMode::Query,
            "get_record_statistics",
            json!([institution_id]),
        )
        .await
    }

    async fn create_credit_deduction(
        &self,
        request: CreateDeductionRequest,
    ) -> Result<CreditDeductionRecord, LedgerClientError> {
        self.call_enveloped(CallMode::Call, "create_credit_record", json!([request]))
            .await
    }

    async fn get_credit_deductions(
        &self,
        institution_id: Option<InstitutionId>,
    ) -> Result<Vec<CreditDeductionRecord>, LedgerClientError> {
        self.call_list(
            CallMode::Query,
            "get_credit_records",
            json!([institution_id]),
        )
        .await
    }

    async fn deduct_query_token(
        &self,
        institution_id: InstitutionId,
        user_did: UserDid,
    ) -> Result<bool, LedgerClientError> {
        self.call_enveloped(
            CallMode::Call,
            "deduct_query_token",
            json!([institution_id, user_did]),
        )
        .await
    }

    async fn get_risk_assessment(
        &self,
        institution_id: InstitutionId,
        user_did: UserDid,
    ) -> Result<RiskAssessment, LedgerClientError> {
        self.call_enveloped(
            CallMode::Query,
            "get_risk_assessment",
            json!([institution_id, user_did]),
        )
        .await
    }

    async fn query_assessment_reports(
        &self,
        institution_id: InstitutionId,
        days: Option<u64>,
    ) -> Result<AssessmentListResponse, LedgerClientError> {
        self.call_plain(
            CallMode::Query,
            "query_assessment_reports",
            json!([institution_id, days]),
        )
        .await
    }

    async fn get_service_settings(
        &self,
        institution_id: InstitutionId,
    ) -> Result<ServiceSettings, LedgerClientError> {
        self.call_enveloped(
            CallMode::Query,
            "get_service_settings",
            json!([institution_id]),
        )
        .await
    }

    async fn update_service_settings(
        &self,
        institution_id: InstitutionId,
        settings: ServiceSettings,
    ) -> Result<(), LedgerClientError> {
        self.call_enveloped(
            CallMode::Call,
            "update_service_settings",
            json!([institution_id, settings]),
        )
        .await
    }

    async fn get_upload_history(
        &self,
        institution_id: InstitutionId,
        params: HistoryQueryParams,
    ) -> Result<UploadHistoryResponse, LedgerClientError> {
        self.call_enveloped(
            CallMode::Query,
            "get_upload_history",
            json!([institution_id, params]),
        )
        .await
    }

    async fn retry_upload(
        &self,
        institution_id: InstitutionId,
        record_id: RecordId,
    ) -> Result<UploadRecord, LedgerClientError> {
        self.call_enveloped(
            CallMode::Call,
            "retry_record",
            json!([institution_id, record_id]),
        )
        .await
    }
}
