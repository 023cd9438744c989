use serde::{Deserialize, Serialize};
use shared_types::InstitutionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstitutionStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditScore {
    pub score: u64,
    pub last_update: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTrading {
    pub bought: u64,
    pub sold: u64,
}

/// Institution record as stored on the ledger.
///
/// `join_time` and `last_active` are nanoseconds since the Unix epoch. The
/// usage counters (`api_calls`, `dcc_consumed`, `data_uploads`) are lifetime
/// totals maintained by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: InstitutionId,
    pub name: String,
    pub full_name: String,
    pub password_hash: String,
    pub status: InstitutionStatus,
    pub join_time: u64,
    pub last_active: u64,
    pub api_calls: u64,
    pub dcc_consumed: u64,
    pub data_uploads: u64,
    pub credit_score: CreditScore,
    pub token_trading: TokenTrading,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub full_name: String,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub institution_id: Option<InstitutionId>,
    pub message: String,
    pub full_name: String,
}
