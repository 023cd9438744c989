use time::Date;
use time::macros::format_description;

use super::dto::{
    CreditRecordResponseDTO, InstitutionRecordsListDTO, RecordContentDTO, RecordSearchQueryDTO,
    RecordStatusDTO, RecordTypeDTO,
};
use crate::proto::record::{
    CreditRecord, InstitutionRecordsResponse, RecordContent, RecordQueryParams, RecordStatus,
    RecordType,
};
use crate::service::error::ServiceError;
use crate::util::amount::from_minor_units;
use crate::util::timestamp::from_ledger_ns;

const QUERY_DATE_FORMAT: &[time::format_description::FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

impl From<RecordType> for RecordTypeDTO {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::LoanRecord => RecordTypeDTO::Loan,
            RecordType::RepaymentRecord => RecordTypeDTO::Repayment,
            RecordType::NotificationRecord => RecordTypeDTO::Notification,
        }
    }
}

impl From<RecordTypeDTO> for RecordType {
    fn from(value: RecordTypeDTO) -> Self {
        match value {
            RecordTypeDTO::Loan => RecordType::LoanRecord,
            RecordTypeDTO::Repayment => RecordType::RepaymentRecord,
            RecordTypeDTO::Notification => RecordType::NotificationRecord,
        }
    }
}

impl From<RecordStatus> for RecordStatusDTO {
    fn from(value: RecordStatus) -> Self {
        match value {
            RecordStatus::Pending => RecordStatusDTO::Pending,
            RecordStatus::Confirmed => RecordStatusDTO::Confirmed,
            RecordStatus::Rejected => RecordStatusDTO::Rejected,
        }
    }
}

impl From<RecordStatusDTO> for RecordStatus {
    fn from(value: RecordStatusDTO) -> Self {
        match value {
            RecordStatusDTO::Pending => RecordStatus::Pending,
            RecordStatusDTO::Confirmed => RecordStatus::Confirmed,
            RecordStatusDTO::Rejected => RecordStatus::Rejected,
        }
    }
}

impl From<CreditRecord> for CreditRecordResponseDTO {
    fn from(value: CreditRecord) -> Self {
        let content = display_content(value.record_type, value.content);
        if content.is_none() {
            tracing::warn!(record_id = %value.id, "record payload does not match its declared type");
        }

        Self {
            id: value.id,
            institution_id: value.institution_id,
            institution_name: value.institution_name,
            institution_full_name: value.institution_full_name,
            record_type: value.record_type.into(),
            user_did: value.user_did,
            event_date: value.event_date,
            content,
            canister_id: value.canister_id,
            submitted_at: from_ledger_ns(value.timestamp),
            status: value.status.into(),
            reward_amount: value.reward_amount,
        }
    }
}

fn display_content(record_type: RecordType, content: RecordContent) -> Option<RecordContentDTO> {
    match (record_type, content) {
        (RecordType::LoanRecord, RecordContent::Loan(loan)) => Some(RecordContentDTO::Loan {
            amount: from_minor_units(loan.amount),
            loan_id: loan.loan_id,
            term_months: loan.term_months,
            interest_rate: loan.interest_rate,
        }),
        (RecordType::RepaymentRecord, RecordContent::Repayment(repayment)) => {
            Some(RecordContentDTO::Repayment {
                amount: from_minor_units(repayment.amount),
                loan_id: repayment.loan_id,
                repayment_date: repayment.repayment_date,
            })
        }
        (RecordType::NotificationRecord, RecordContent::Notification(notification)) => {
            Some(RecordContentDTO::Notification {
                amount: from_minor_units(notification.amount),
                days: notification.days,
                period_amount: from_minor_units(notification.period_amount),
            })
        }
        _ => None,
    }
}

impl From<InstitutionRecordsResponse> for InstitutionRecordsListDTO {
    fn from(value: InstitutionRecordsResponse) -> Self {
        Self {
            institution_id: value.institution_id,
            institution_name: value.institution_name,
            user_did: value.user_did,
            records: value.records.into_iter().map(Into::into).collect(),
        }
    }
}

pub(crate) fn search_query_to_params(
    query: RecordSearchQueryDTO,
) -> Result<RecordQueryParams, ServiceError> {
    Ok(RecordQueryParams {
        institution_id: query.institution_id,
        user_did: query.user_did,
        record_type: query.record_type.map(Into::into),
        status: query.status.map(Into::into),
        start_date: format_query_date(query.start_date)?,
        end_date: format_query_date(query.end_date)?,
    })
}

fn format_query_date(date: Option<Date>) -> Result<Option<String>, ServiceError> {
    date.map(|date| {
        date.format(QUERY_DATE_FORMAT)
            .map_err(|error| ServiceError::MappingError(error.to_string()))
    })
    .transpose()
}
