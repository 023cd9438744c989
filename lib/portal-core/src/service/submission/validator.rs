use super::dto::{SubmissionContentDTO, SubmitRecordRequestDTO};
use crate::service::error::{ServiceError, ValidationError};

pub(crate) const MAX_BATCH_ROWS: usize = 1000;
pub(crate) const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub(super) fn validate_submission(request: &SubmitRecordRequestDTO) -> Result<(), ServiceError> {
    if request.user_did.as_str().trim().is_empty() {
        return Err(ValidationError::EmptyUserDid.into());
    }

    match &request.content {
        SubmissionContentDTO::Loan {
            amount,
            term_months,
            interest_rate,
        } => {
            validate_amount(*amount)?;
            if *term_months == 0 {
                return Err(ValidationError::InvalidLoanTerm.into());
            }
            if !interest_rate.is_finite() || *interest_rate < 0.0 {
                return Err(ValidationError::InvalidInterestRate.into());
            }
        }
        SubmissionContentDTO::Repayment { amount, .. } => {
            validate_amount(*amount)?;
        }
        SubmissionContentDTO::Notification {
            amount,
            days,
            period_amount,
        } => {
            validate_amount(*amount)?;
            if *days == 0 {
                return Err(ValidationError::InvalidDayCount.into());
            }
            if let Some(period_amount) = period_amount {
                validate_amount(*period_amount)?;
            }
        }
    }

    Ok(())
}

pub(super) fn throw_if_batch_too_large(count: usize) -> Result<(), ServiceError> {
    if count > MAX_BATCH_ROWS {
        return Err(ValidationError::BatchTooLarge {
            count,
            limit: MAX_BATCH_ROWS,
        }
        .into());
    }
    Ok(())
}

pub(super) fn throw_if_upload_too_large(bytes: usize) -> Result<(), ServiceError> {
    if bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge {
            bytes,
            limit: MAX_UPLOAD_BYTES,
        }
        .into());
    }
    Ok(())
}

fn validate_amount(amount: f64) -> Result<(), ServiceError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount(amount.to_string()).into());
    }
    Ok(())
}
