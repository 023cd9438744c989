use serde::{Deserialize, Serialize};

/// Off-ledger settlement metadata attached to a DCC recharge or deduction.
///
/// `dcc_amount` is whole tokens; `usdt_amount` is the settled fiat value.
/// `created_at` is nanoseconds since the Unix epoch, set by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DccTransactionRequest {
    pub dcc_amount: u64,
    pub usdt_amount: f64,
    pub tx_hash: String,
    pub remarks: String,
    pub created_at: u64,
}
