use shared_types::InstitutionId;

use super::SubmissionService;
use super::dto::{BatchSubmissionReceiptDTO, SubmissionReceiptDTO, SubmitRecordRequestDTO};
use super::mapper::{submission_to_wire, submissions_from_csv};
use super::validator::{throw_if_batch_too_large, throw_if_upload_too_large, validate_submission};
use crate::proto::record::BatchSubmissionRequest;
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};

const CSV_TEMPLATE: &str = "\
recordType,userDid,eventDate,amount,term,interestRate,originalLoanId,overdueDays,remarks
loan,did:example:123,2024-03-24,100000,12,4.35,,,首次贷款
loan,did:example:456,2024-03-24,50000,6,3.85,,,小额贷款
repayment,did:example:123,2024-03-24,5000,,,REC123,,正常还款
repayment,did:example:456,2024-03-24,3000,,,REC456,,提前还款
overdue,did:example:789,2024-03-24,2000,,,,30,首次逾期
overdue,did:example:789,2024-03-24,3000,,,,45,持续逾期

# 字段说明：
# recordType: 记录类型（loan-贷款记录, repayment-还款记录, overdue-逾期记录）
# userDid: 用户DID
# eventDate: 发生日期（格式：YYYY-MM-DD）
# amount: 金额（必填）
# term: 贷款期限（月），仅贷款记录需填写
# interestRate: 年化利率（%），仅贷款记录需填写
# originalLoanId: 原贷款编号，仅还款记录需填写
# overdueDays: 逾期天数，仅逾期记录需填写
# remarks: 备注（选填）
";

impl SubmissionService {
    /// Submits one record captured on the form.
    pub async fn submit_record(
        &self,
        request: SubmitRecordRequestDTO,
    ) -> Result<SubmissionReceiptDTO, ServiceError> {
        validate_submission(&request)?;
        let institution_id = self.current_institution()?;
        let wire_request = submission_to_wire(request, institution_id)?;

        let receipt: SubmissionReceiptDTO =
            self.ledger_client.submit_record(wire_request).await?.into();

        tracing::info!(record_id = %receipt.record_id, "record submitted");
        Ok(receipt)
    }

    /// Submits up to a thousand records in one call. The receipt reports
    /// how many of them the ledger accepted.
    pub async fn submit_records_batch(
        &self,
        requests: Vec<SubmitRecordRequestDTO>,
    ) -> Result<BatchSubmissionReceiptDTO, ServiceError> {
        if requests.is_empty() {
            return Err(ValidationError::EmptyRecordBatch.into());
        }
        throw_if_batch_too_large(requests.len())?;

        let institution_id = self.current_institution()?;
        let mut records = Vec::with_capacity(requests.len());
        for request in requests {
            validate_submission(&request)?;
            records.push(submission_to_wire(request, institution_id.clone())?);
        }

        let receipt: BatchSubmissionReceiptDTO = self
            .ledger_client
            .submit_records_batch(BatchSubmissionRequest { records })
            .await?
            .into();

        tracing::info!(
            submitted = receipt.submitted,
            failed = receipt.failed,
            "record batch submitted"
        );
        Ok(receipt)
    }

    /// Parses an uploaded CSV file into typed submissions. The first
    /// invalid row fails the whole upload with its row number.
    pub fn parse_csv_records(
        &self,
        bytes: &[u8],
    ) -> Result<Vec<SubmitRecordRequestDTO>, ServiceError> {
        throw_if_upload_too_large(bytes.len())?;

        let submissions = submissions_from_csv(bytes)?;
        if submissions.is_empty() {
            return Err(ValidationError::EmptyRecordBatch.into());
        }
        Ok(submissions)
    }

    /// Template offered for download on the batch upload screen.
    pub fn csv_template(&self) -> &'static str {
        CSV_TEMPLATE
    }

    fn current_institution(&self) -> Result<InstitutionId, ServiceError> {
        self.session_provider
            .session()
            .and_then(|session| session.institution_id)
            .ok_or_else(|| BusinessLogicError::NoActiveSession.into())
    }
}
