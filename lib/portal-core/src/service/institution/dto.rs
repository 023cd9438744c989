use one_dto_mapper::{From, Into};
use shared_types::InstitutionId;
use strum_macros::Display;
use time::OffsetDateTime;

use crate::proto::institution::{InstitutionStatus, LoginRequest, RegisterRequest, TokenTrading};

/// Status vocabulary as rendered in both portals.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, From, Into)]
#[from(InstitutionStatus)]
#[into(InstitutionStatus)]
#[strum(serialize_all = "lowercase")]
pub enum InstitutionStatusDTO {
    Active,
    Inactive,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, From)]
#[from(TokenTrading)]
pub struct TokenTradingDTO {
    pub bought: u64,
    pub sold: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CreditScoreDTO {
    pub score: u64,
    /// `None` until the service has scored the institution at least once.
    pub last_update: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InstitutionResponseDTO {
    pub id: InstitutionId,
    pub name: String,
    pub full_name: String,
    pub status: InstitutionStatusDTO,
    pub join_time: Option<OffsetDateTime>,
    pub last_active: Option<OffsetDateTime>,
    pub api_calls: u64,
    pub dcc_consumed: u64,
    pub data_uploads: u64,
    pub credit_score: CreditScoreDTO,
    pub token_trading: TokenTradingDTO,
}

#[derive(Clone, Debug, Into)]
#[into(RegisterRequest)]
pub struct RegisterInstitutionRequestDTO {
    pub name: String,
    pub full_name: String,
    /// The service falls back to its default password when not set.
    pub password: Option<String>,
}

#[derive(Clone, Debug, Into)]
#[into(LoginRequest)]
pub struct InstitutionLoginRequestDTO {
    pub name: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InstitutionLoginResponseDTO {
    pub institution_id: InstitutionId,
    pub full_name: String,
}
