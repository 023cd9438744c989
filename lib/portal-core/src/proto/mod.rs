//! Wire-level mirror of the ledger service interface.
//!
//! Field names, variant tags and integer widths in this module are fixed by
//! the remote interface definition and must not drift from it. Display
//! concerns (unit scaling, timestamp rendering, lowercase labels) live in the
//! service layer, never here.

pub mod assessment;
pub mod deduction;
pub mod history;
pub mod institution;
pub mod record;
pub mod reply;
pub mod session;
pub mod settings;
pub mod token;
