use thiserror::Error;

pub mod core_config;
pub mod validator;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parsing error: `{0}`")]
    Parsing(#[from] ConfigParsingError),
    #[error("Config validation error: `{0}`")]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("General parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Invalid ledger host `{0}`")]
    InvalidLedgerHost(String),
    #[error("Invalid identity provider url `{0}`")]
    InvalidIdentityProviderUrl(String),
    #[error("Missing value for `{0}`")]
    MissingValue(String),
    #[error("Value out of range for `{0}`: {1}")]
    OutOfRange(&'static str, String),
}
