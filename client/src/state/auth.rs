//! Auth-session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and role-aware components to coordinate login
//! redirects and role-dependent rendering. Provided as `RwSignal<AuthState>`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::{Decision, Role, Route, SessionState, SessionStore, StorageBackend};

/// Stored session snapshot plus loading status.
///
/// `loading` stays true until the browser store has been read after
/// hydration. While loading no guard decision is made, so server rendering
/// never redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionState,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: SessionState::Empty, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn loaded(session: SessionState) -> Self {
        Self { session, loading: false }
    }

    /// Guard decision for `route`, or `None` while the store is still unread.
    #[must_use]
    pub fn decision(&self, route: Route) -> Option<Decision> {
        (!self.loading).then(|| gate::check_route(&self.session, route))
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }
}

/// Current session in `store`. An unreadable store counts as signed out.
pub fn read_session<B: StorageBackend>(store: &SessionStore<B>) -> SessionState {
    store.get_session().unwrap_or_else(|e| {
        log::warn!("session storage unreadable: {e}");
        SessionState::Empty
    })
}

/// Re-read `store` and return the new auth state if it differs from
/// `current`.
pub fn refresh_from_store<B: StorageBackend>(store: &SessionStore<B>, current: &AuthState) -> Option<AuthState> {
    let fresh = AuthState::loaded(read_session(store));
    (fresh != *current).then_some(fresh)
}

/// How the session role is established when a visitor signs in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RolePolicy {
    /// Ask the server (`GET /users/me`) for the account's role. The role
    /// picked on the login form is only a hint.
    #[default]
    VerifyWithBackend,
    /// Store the role the visitor picked on the login form as-is.
    TrustDeclared,
}
