//! Sign-in and sign-out orchestration.
//!
//! DESIGN
//! ======
//! The HTTP calls sit behind [`Authenticator`] so the flow can be driven by a
//! fake in tests. [`sign_in`] establishes the role according to the active
//! [`RolePolicy`] and only then writes the session store. The visitor sees a
//! single generic message whatever went wrong; the detail goes to the log.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gate::{Role, Session, SessionError, SessionState, SessionStore, StorageBackend, StoreError};

use super::api;
use super::types::LoginForm;
use crate::state::auth::RolePolicy;

/// The only failure text shown on the login page.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("credentials rejected")]
    Authentication,
    #[error("network error: {0}")]
    Network(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("account role could not be determined")]
    RoleUnavailable,
}

impl LoginError {
    /// Message displayed to the visitor.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        LOGIN_FAILED_MESSAGE
    }
}

impl From<SessionError> for LoginError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::EmptyToken => Self::Authentication,
            SessionError::InvalidRole(_) => Self::RoleUnavailable,
            SessionError::Store(e) => Self::Store(e),
        }
    }
}

/// Credential exchange with the back end.
#[allow(async_fn_in_trait)]
pub trait Authenticator {
    /// Exchange credentials for an opaque token.
    async fn login(&self, identifier: &str, secret: &str) -> Result<String, LoginError>;

    /// Role the back end has on record for the account behind `token`.
    async fn current_role(&self, token: &str) -> Result<Role, LoginError>;

    /// Revoke `token`. Best-effort.
    async fn logout(&self, token: &str);
}

/// [`Authenticator`] backed by the server's HTTP API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthenticator;

impl Authenticator for HttpAuthenticator {
    async fn login(&self, identifier: &str, secret: &str) -> Result<String, LoginError> {
        api::request_token(identifier, secret).await
    }

    async fn current_role(&self, token: &str) -> Result<Role, LoginError> {
        api::fetch_current_role(token).await
    }

    async fn logout(&self, token: &str) {
        api::logout(token).await;
    }
}

/// Authenticate, settle the role, and persist the session.
///
/// Nothing is written to `store` unless every step succeeds.
///
/// # Errors
///
/// Returns the first [`LoginError`] encountered.
pub async fn sign_in<A, B>(
    authenticator: &A,
    store: &SessionStore<B>,
    form: &LoginForm,
    policy: RolePolicy,
) -> Result<Session, LoginError>
where
    A: Authenticator,
    B: StorageBackend,
{
    let token = authenticator.login(form.identifier.trim(), &form.password).await?;

    let role = match policy {
        RolePolicy::TrustDeclared => form.role,
        RolePolicy::VerifyWithBackend => match authenticator.current_role(&token).await {
            Ok(role) => {
                if role != form.role {
                    log::warn!("login form declared {} but the account is {role}", form.role);
                }
                role
            }
            Err(e) => {
                log::warn!("role lookup failed after login: {e}");
                authenticator.logout(&token).await;
                return Err(LoginError::RoleUnavailable);
            }
        },
    };

    let session = store.store_session(&token, role)?;
    log::debug!("signed in as {role}");
    Ok(session)
}

/// Revoke the stored token server-side, then clear the local session.
///
/// The local session is cleared even if the server call fails.
///
/// # Errors
///
/// Returns a [`StoreError`] if the store cannot be read or cleared.
pub async fn sign_out<A, B>(authenticator: &A, store: &SessionStore<B>) -> Result<(), StoreError>
where
    A: Authenticator,
    B: StorageBackend,
{
    let stored = store.get_session();
    let token = match &stored {
        Ok(SessionState::Active(session)) => Some(session.token.as_str()),
        Ok(SessionState::Invalid(invalid)) => Some(invalid.token.as_str()),
        Ok(SessionState::Empty) | Err(_) => None,
    };
    if let Some(token) = token {
        authenticator.logout(token).await;
    }
    let cleared = store.clear_session();
    stored.and(cleared)
}
