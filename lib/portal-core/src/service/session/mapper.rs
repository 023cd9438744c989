use std::str::FromStr;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::proto::session::{Session, SessionRole};
use crate::service::error::ServiceError;

pub(super) fn session_from_entries(
    principal: String,
    role: &str,
    token: Option<String>,
    institution_id: Option<String>,
    institution_name: Option<String>,
    established_at: &str,
) -> Result<Session, ServiceError> {
    let role = SessionRole::from_str(role)
        .map_err(|_| ServiceError::MappingError(format!("unknown session role `{role}`")))?;
    let established_at = OffsetDateTime::parse(established_at, &Rfc3339)
        .map_err(|error| ServiceError::MappingError(error.to_string()))?;

    Ok(Session {
        principal,
        role,
        token,
        institution_id: institution_id.map(Into::into),
        institution_name,
        established_at,
    })
}

pub(super) fn established_at_entry(session: &Session) -> Result<String, ServiceError> {
    session
        .established_at
        .format(&Rfc3339)
        .map_err(|error| ServiceError::MappingError(error.to_string()))
}
