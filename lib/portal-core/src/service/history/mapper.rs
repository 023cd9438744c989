use time::format_description::well_known::Rfc3339;
use time::macros::time;
use time::{Date, OffsetDateTime, Time};

use super::dto::{HistoryQueryDTO, UploadHistoryDTO, UploadRecordDTO};
use crate::proto::history::{HistoryQueryParams, UploadHistoryResponse, UploadRecord};
use crate::service::error::ServiceError;

impl From<UploadRecord> for UploadRecordDTO {
    fn from(value: UploadRecord) -> Self {
        let submitted_at = OffsetDateTime::parse(&value.submitted_at, &Rfc3339).ok();
        if submitted_at.is_none() {
            tracing::warn!(upload_id = %value.id, "upload entry carries an unreadable timestamp");
        }

        Self {
            id: value.id,
            user_did: value.user_did,
            institution_id: value.institution_id,
            status: value.status,
            submitted_at,
            review_result: value.review_result.into(),
        }
    }
}

impl From<UploadHistoryResponse> for UploadHistoryDTO {
    fn from(value: UploadHistoryResponse) -> Self {
        Self {
            data: value.data.into_iter().map(Into::into).collect(),
            total: value.total,
        }
    }
}

/// The ledger compares date filters against full record timestamps, so a
/// day filter is widened to cover the whole day.
pub(super) fn history_query_to_params(
    query: HistoryQueryDTO,
) -> Result<HistoryQueryParams, ServiceError> {
    Ok(HistoryQueryParams {
        status: query.status,
        start_date: day_bound(query.start_date, Time::MIDNIGHT)?,
        end_date: day_bound(query.end_date, time!(23:59:59))?,
    })
}

fn day_bound(date: Option<Date>, time: Time) -> Result<Option<String>, ServiceError> {
    date.map(|date| {
        date.with_time(time)
            .assume_utc()
            .format(&Rfc3339)
            .map_err(|error| ServiceError::MappingError(error.to_string()))
    })
    .transpose()
}
