use one_dto_mapper::From;
use shared_types::{InstitutionId, UserDid};
use time::{Date, OffsetDateTime};

use crate::proto::history::ReviewResult;

/// Upload history filter. Unset fields match everything.
#[derive(Clone, Debug, Default)]
pub struct HistoryQueryDTO {
    pub status: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(ReviewResult)]
pub struct ReviewResultDTO {
    pub passed: bool,
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadRecordDTO {
    pub id: String,
    pub user_did: UserDid,
    pub institution_id: InstitutionId,
    pub status: String,
    /// `None` when the ledger sent a timestamp that does not parse.
    pub submitted_at: Option<OffsetDateTime>,
    pub review_result: ReviewResultDTO,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadHistoryDTO {
    pub data: Vec<UploadRecordDTO>,
    pub total: u64,
}
