pub mod in_memory;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStorageError {
    #[error("Session storage failure: {0}")]
    Storage(String),
}

/// Key-value store backing the session, abstracting over whatever the host
/// embedding the core provides (browser local storage, a keychain, a plain
/// map in tests).
///
/// Values are opaque strings; the session layer owns the key naming.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionStorageError>;
    fn remove(&self, key: &str) -> Result<(), SessionStorageError>;
    /// Drops everything, not just session keys. Logout uses this so that no
    /// stale state survives into the next login.
    fn clear(&self) -> Result<(), SessionStorageError>;
}
