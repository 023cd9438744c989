use shared_types::InstitutionId;
use time::OffsetDateTime;

use super::SessionManager;
use super::mapper;
use crate::proto::session::{Session, SessionProvider, SessionRole};
use crate::service::error::{BusinessLogicError, ServiceError};
use crate::service::session::{
    ESTABLISHED_AT_KEY, INSTITUTION_ID_KEY, INSTITUTION_NAME_KEY, PRINCIPAL_KEY, ROLE_KEY,
    TOKEN_KEY,
};

impl SessionManager {
    /// Runs the identity handshake and persists the resulting session with
    /// role `Pending`. Classification into admin or institution follows in a
    /// separate step once the portal login call has confirmed the caller.
    ///
    /// Returns the authenticated principal.
    pub async fn login(&self) -> Result<String, ServiceError> {
        let identity = self.identity_provider.authorize().await?;

        let session = Session {
            principal: identity.principal,
            role: SessionRole::Pending,
            token: Some(identity.session_token),
            institution_id: None,
            institution_name: None,
            established_at: OffsetDateTime::now_utc(),
        };
        self.persist(&session)?;

        tracing::info!(principal = %session.principal, "session established");
        Ok(session.principal)
    }

    /// Classifies the pending session as an institution operator.
    pub fn establish_institution(
        &self,
        institution_id: InstitutionId,
        institution_name: String,
    ) -> Result<(), ServiceError> {
        let mut session = self.current()?.ok_or(BusinessLogicError::NoActiveSession)?;

        session.role = SessionRole::Institution;
        session.institution_id = Some(institution_id);
        session.institution_name = Some(institution_name);
        self.persist(&session)?;

        tracing::info!(principal = %session.principal, "session classified as institution");
        Ok(())
    }

    /// Classifies the pending session as a platform administrator.
    pub fn establish_admin(&self) -> Result<(), ServiceError> {
        let mut session = self.current()?.ok_or(BusinessLogicError::NoActiveSession)?;

        session.role = SessionRole::Admin;
        session.institution_id = None;
        session.institution_name = None;
        self.persist(&session)?;

        tracing::info!(principal = %session.principal, "session classified as admin");
        Ok(())
    }

    /// Session snapshot, `None` when absent, expired or unreadable.
    pub fn current(&self) -> Result<Option<Session>, ServiceError> {
        let Some(principal) = self.storage.get(PRINCIPAL_KEY)? else {
            return Ok(None);
        };
        let (Some(role), Some(established_at)) = (
            self.storage.get(ROLE_KEY)?,
            self.storage.get(ESTABLISHED_AT_KEY)?,
        ) else {
            tracing::warn!("incomplete session state in storage, ignoring it");
            return Ok(None);
        };

        let session = match mapper::session_from_entries(
            principal,
            &role,
            self.storage.get(TOKEN_KEY)?,
            self.storage.get(INSTITUTION_ID_KEY)?,
            self.storage.get(INSTITUTION_NAME_KEY)?,
            &established_at,
        ) {
            Ok(session) => session,
            Err(error) => {
                tracing::warn!(%error, "malformed session state in storage, ignoring it");
                return Ok(None);
            }
        };

        if OffsetDateTime::now_utc() - session.established_at > self.config.idle_timeout {
            return Ok(None);
        }

        Ok(Some(session))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.current(), Ok(Some(_)))
    }

    /// Drops the whole storage, not just session keys, so nothing cached
    /// under one identity leaks into the next. Safe to call with no session.
    pub fn logout(&self) -> Result<(), ServiceError> {
        self.storage.clear()?;
        tracing::info!("session cleared");
        Ok(())
    }

    fn persist(&self, session: &Session) -> Result<(), ServiceError> {
        self.storage.set(PRINCIPAL_KEY, &session.principal)?;
        self.storage.set(ROLE_KEY, &session.role.to_string())?;
        self.storage
            .set(ESTABLISHED_AT_KEY, &mapper::established_at_entry(session)?)?;

        match &session.token {
            Some(token) => self.storage.set(TOKEN_KEY, token)?,
            None => self.storage.remove(TOKEN_KEY)?,
        }
        match &session.institution_id {
            Some(id) => self.storage.set(INSTITUTION_ID_KEY, id.as_str())?,
            None => self.storage.remove(INSTITUTION_ID_KEY)?,
        }
        match &session.institution_name {
            Some(name) => self.storage.set(INSTITUTION_NAME_KEY, name)?,
            None => self.storage.remove(INSTITUTION_NAME_KEY)?,
        }

        Ok(())
    }
}

impl SessionProvider for SessionManager {
    fn session(&self) -> Option<Session> {
        self.current().ok().flatten()
    }
}
