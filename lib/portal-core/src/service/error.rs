use shared_types::{InstitutionId, RecordId, UserDid};
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::provider::identity::IdentityError;
use crate::provider::ledger_client::LedgerClientError;
use crate::provider::session_storage::SessionStorageError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),
    #[error("Config validation error `{0}`")]
    ConfigValidationError(#[from] ConfigValidationError),
    #[error("Ledger client error `{0}`")]
    LedgerClientError(#[from] LedgerClientError),
    #[error("Identity provider error `{0}`")]
    IdentityError(#[from] IdentityError),
    #[error("Session storage error `{0}`")]
    SessionStorageError(#[from] SessionStorageError),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Response mapping error: {0}")]
    ResponseMapping(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EntityNotFoundError {
    #[error("Institution `{0}` not found")]
    Institution(InstitutionId),

    #[error("Credit record `{0}` not found")]
    CreditRecord(RecordId),
}

#[derive(Debug, thiserror::Error)]
pub enum BusinessLogicError {
    #[error("No session established")]
    NoActiveSession,

    #[error("Login rejected: {reason}")]
    LoginRejected { reason: String },

    #[error("Query token charge declined for `{0}`")]
    QueryTokenDeclined(UserDid),
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Record batch is empty")]
    EmptyRecordBatch,

    #[error("Record batch of {count} rows exceeds the limit of {limit}")]
    BatchTooLarge { count: usize, limit: usize },

    #[error("Upload of {bytes} bytes exceeds the limit of {limit}")]
    FileTooLarge { bytes: usize, limit: usize },

    #[error("User DID must not be empty")]
    EmptyUserDid,

    #[error("Record id must not be empty")]
    EmptyRecordId,

    #[error("Invalid amount `{0}`")]
    InvalidAmount(String),

    #[error("Loan term must be a positive number of months")]
    InvalidLoanTerm,

    #[error("Interest rate must be a non-negative number")]
    InvalidInterestRate,

    #[error("Overdue day count must be positive")]
    InvalidDayCount,

    #[error("Deduction form is missing required fields")]
    IncompleteDeductionForm,

    #[error("Reward share ratio must be between 0 and 100")]
    InvalidRewardShareRatio,

    #[error("CSV file is malformed: {0}")]
    MalformedCsv(String),

    #[error("Row {row}: {reason}")]
    InvalidRecordRow { row: usize, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Institution001,

    Record001,
    Record002,

    Session001,

    Auth001,

    Token001,

    Validation001,

    Ledger,
    ResponseMapping,

    Unmapped,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Institution001 => "Institution not found",

            ErrorCode::Record001 => "Credit record not found",
            ErrorCode::Record002 => "Record batch rejected",

            ErrorCode::Session001 => "No session established",

            ErrorCode::Auth001 => "Login rejected",

            ErrorCode::Token001 => "Query token charge declined",

            ErrorCode::Validation001 => "Request validation failed",

            ErrorCode::Ledger => "Ledger call failed",

            ErrorCode::ResponseMapping => "Response mapping error",

            ErrorCode::Unmapped => "Unmapped error code",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::LedgerClientError(_) => ErrorCode::Ledger,
            ServiceError::ResponseMapping(_) => ErrorCode::ResponseMapping,

            ServiceError::MappingError(_)
            | ServiceError::ConfigValidationError(_)
            | ServiceError::IdentityError(_)
            | ServiceError::SessionStorageError(_) => ErrorCode::Unmapped,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Institution(_) => ErrorCode::Institution001,
            EntityNotFoundError::CreditRecord(_) => ErrorCode::Record001,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::NoActiveSession => ErrorCode::Session001,
            BusinessLogicError::LoginRejected { .. } => ErrorCode::Auth001,
            BusinessLogicError::QueryTokenDeclined(_) => ErrorCode::Token001,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyRecordBatch
            | ValidationError::BatchTooLarge { .. }
            | ValidationError::FileTooLarge { .. }
            | ValidationError::MalformedCsv(_)
            | ValidationError::InvalidRecordRow { .. } => ErrorCode::Record002,

            ValidationError::EmptyUserDid
            | ValidationError::EmptyRecordId
            | ValidationError::InvalidAmount(_)
            | ValidationError::InvalidLoanTerm
            | ValidationError::InvalidInterestRate
            | ValidationError::InvalidDayCount
            | ValidationError::IncompleteDeductionForm
            | ValidationError::InvalidRewardShareRatio => ErrorCode::Validation001,
        }
    }
}

impl From<time::error::Parse> for ServiceError {
    fn from(value: time::error::Parse) -> Self {
        ServiceError::MappingError(value.to_string())
    }
}
