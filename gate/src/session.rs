//! Session store: the persisted `(token, role)` pair of the current visitor.
//!
//! ARCHITECTURE
//! ============
//! [`SessionStore`] is an injected service over a synchronous key/value
//! [`StorageBackend`]. The browser supplies a `localStorage` backend; tests
//! and server-side rendering use [`MemoryBackend`].
//!
//! INVARIANTS
//! ==========
//! Token and role are written together and cleared together. A failed role
//! write after a successful token write removes both keys. A read that finds
//! a token without a recognized role yields [`SessionState::Invalid`], which
//! every consumer must treat as "no access".

use std::collections::HashMap;
use std::sync::Mutex;

use crate::role::{InvalidRoleError, Role};

/// Storage key holding the opaque token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the role string.
pub const ROLE_KEY: &str = "userRole";

/// Failure of the underlying key/value storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage is reachable in this environment (e.g. server-side rendering).
    #[error("session storage unavailable")]
    Unavailable,
    /// The storage rejected the operation (quota, privacy mode, ...).
    #[error("session storage error: {0}")]
    Backend(String),
}

/// Failure of [`SessionStore::set_session`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidRole(#[from] InvalidRoleError),
    #[error("session token is empty")]
    EmptyToken,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Synchronous key/value persistence, shaped after the Web Storage API.
pub trait StorageBackend {
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns a [`StoreError`] if the value cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns a [`StoreError`] if the key cannot be removed.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.items.lock().map_err(|_| StoreError::Backend("memory backend poisoned".to_owned()))
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items()?.remove(key);
        Ok(())
    }
}

/// An authenticated visitor's record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

/// A stored token whose role is missing or outside the known set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidSession {
    pub token: String,
    /// The raw stored role, if any.
    pub role: Option<String>,
}

/// Snapshot of what the store currently holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Empty,
    Active(Session),
    Invalid(InvalidSession),
}

impl SessionState {
    /// Interpret raw stored values. A blank or absent token is `Empty` no
    /// matter what role is stored.
    #[must_use]
    pub fn from_parts(token: Option<&str>, role: Option<&str>) -> Self {
        let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
            return Self::Empty;
        };
        match role.map(str::parse::<Role>) {
            Some(Ok(role)) => Self::Active(Session { token: token.to_owned(), role }),
            _ => Self::Invalid(InvalidSession { token: token.to_owned(), role: role.map(str::to_owned) }),
        }
    }

    /// The session, if it is complete and valid.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Active(session) => Some(session),
            Self::Empty | Self::Invalid(_) => None,
        }
    }

    /// Valid role of the session; `None` for empty and invalid states.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session().map(|s| s.role)
    }

    /// Token of a complete session; `None` for empty and invalid states.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }
}

/// Session service over a storage backend.
#[derive(Debug, Default)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Store a token with a role given as a string.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidRole`] if `role` is not a known role (nothing is
    /// written), [`SessionError::EmptyToken`] for a blank token, and
    /// [`SessionError::Store`] if the backend fails.
    pub fn set_session(&self, token: &str, role: &str) -> Result<Session, SessionError> {
        let role = role.parse::<Role>()?;
        self.store_session(token, role)
    }

    /// Store a token with an already validated role.
    ///
    /// The previous role is removed before the new token is written, so an
    /// interrupted write can leave an empty or invalid session but never the
    /// new token paired with an old role.
    ///
    /// # Errors
    ///
    /// [`SessionError::EmptyToken`] for a blank token and
    /// [`SessionError::Store`] if the backend fails; on a failed write the
    /// stored token is discarded as well.
    pub fn store_session(&self, token: &str, role: Role) -> Result<Session, SessionError> {
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let written = self
            .backend
            .remove_item(ROLE_KEY)
            .and_then(|()| self.backend.set_item(TOKEN_KEY, token))
            .and_then(|()| self.backend.set_item(ROLE_KEY, role.as_str()));
        if let Err(err) = written {
            self.discard_token();
            return Err(err.into());
        }
        Ok(Session { token: token.to_owned(), role })
    }

    /// Make the stored token unusable after a failed write. A blank token
    /// reads back as [`SessionState::Empty`], so overwriting it is the
    /// fallback when removal is refused.
    fn discard_token(&self) {
        let Err(remove_err) = self.backend.remove_item(TOKEN_KEY) else {
            return;
        };
        if let Err(blank_err) = self.backend.set_item(TOKEN_KEY, "") {
            log::warn!("could not discard token after failed session write: {remove_err}; {blank_err}");
        }
    }

    /// Read the current session state.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    pub fn get_session(&self) -> Result<SessionState, StoreError> {
        let token = self.backend.get_item(TOKEN_KEY)?;
        let role = self.backend.get_item(ROLE_KEY)?;
        Ok(SessionState::from_parts(token.as_deref(), role.as_deref()))
    }

    /// Remove both keys. Both removals are attempted; the first error wins.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if either key cannot be removed.
    pub fn clear_session(&self) -> Result<(), StoreError> {
        let token = self.backend.remove_item(TOKEN_KEY);
        let role = self.backend.remove_item(ROLE_KEY);
        token.and(role)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
