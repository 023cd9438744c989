use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Textual principal of a registered institution.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct InstitutionId(String);

impls_for_string_newtype!(InstitutionId);
