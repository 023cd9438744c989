use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Textual principal of the administrator performing an operation.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct OperatorId(String);

impls_for_string_newtype!(OperatorId);
