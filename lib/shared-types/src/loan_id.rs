use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Client-assigned loan identifier, also used to tie repayments and
/// notifications back to the originating loan.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct LoanId(String);

impls_for_string_newtype!(LoanId);
