use super::dto::DccTransactionDTO;
use crate::proto::token::DccTransactionRequest;
use crate::util::timestamp::now_ledger_ns;

pub(super) fn transaction_to_wire(form: DccTransactionDTO) -> DccTransactionRequest {
    DccTransactionRequest {
        dcc_amount: form.dcc_amount,
        usdt_amount: form.usdt_amount,
        tx_hash: form.tx_hash,
        remarks: form.remarks,
        created_at: now_ledger_ns(),
    }
}
