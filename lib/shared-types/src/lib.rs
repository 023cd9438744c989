mod institution_id;
mod loan_id;
mod macros;
mod operator_id;
mod record_id;
mod report_id;
mod user_did;

pub use institution_id::InstitutionId;
pub use loan_id::LoanId;
pub use operator_id::OperatorId;
pub use record_id::RecordId;
pub use report_id::ReportId;
pub use user_did::UserDid;
