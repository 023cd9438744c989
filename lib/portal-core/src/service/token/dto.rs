/// Settlement form for an off-ledger DCC recharge or deduction.
#[derive(Clone, Debug, PartialEq)]
pub struct DccTransactionDTO {
    pub dcc_amount: u64,
    pub usdt_amount: f64,
    pub tx_hash: String,
    pub remarks: String,
}

/// Net DCC position of the signed-in institution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenBalanceDTO {
    pub dcc: i64,
}
