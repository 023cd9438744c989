use one_dto_mapper::{From, Into};
use shared_types::{InstitutionId, OperatorId};
use time::OffsetDateTime;

use crate::proto::deduction::{CreateDeductionRequest, CreditDeductionRecord};
use crate::util::timestamp::from_ledger_ns;

/// Admin form for docking an institution's credit score.
#[derive(Clone, Debug, PartialEq, Into)]
#[into(CreateDeductionRequest)]
pub struct CreateDeductionRequestDTO {
    pub institution_id: InstitutionId,
    pub deduction_points: u32,
    pub reason: String,
    pub data_quality_issue: String,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(CreditDeductionRecord)]
pub struct CreditDeductionResponseDTO {
    pub id: String,
    pub record_id: String,
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub deduction_points: u32,
    pub reason: String,
    pub data_quality_issue: String,
    #[from(with_fn = from_ledger_ns)]
    pub created_at: Option<OffsetDateTime>,
    pub operator_id: OperatorId,
    pub operator_name: String,
}
