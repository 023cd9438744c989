use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Ledger-assigned identifier of a credit record.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct RecordId(String);

impls_for_string_newtype!(RecordId);
