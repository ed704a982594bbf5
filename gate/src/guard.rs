//! Route guard: decides whether a navigation renders or redirects.
//!
//! The decision is re-evaluated from scratch on every navigation. It is pure
//! and total: each `(SessionState, required role)` pair maps to exactly one
//! [`Decision`], and invalid states always fail closed to the login view.

use crate::role::Role;
use crate::route::{Access, Route};
use crate::session::SessionState;

/// Why a navigation was redirected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// No session is stored.
    MissingToken,
    /// Authenticated, but the view needs a different role.
    RoleMismatch { required: Role, actual: Role },
    /// A token is stored with a missing or unrecognized role.
    InvalidRole,
}

/// Guard outcome for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested view unmodified.
    Render,
    /// Navigate (replacing history) to `to` instead.
    Redirect { to: Route, reason: Denial },
}

/// Which of the three guard states a decision corresponds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Unauthenticated,
    AuthenticatedWrongRole,
    AuthenticatedAuthorized,
}

impl Decision {
    /// Guard state for a decision produced by [`decide`].
    ///
    /// Only meaningful for role-gated decisions. [`check_route`] renders
    /// public routes without a session, and `state()` would still report
    /// those as [`GuardState::AuthenticatedAuthorized`].
    #[must_use]
    pub fn state(self) -> GuardState {
        match self {
            Self::Render => GuardState::AuthenticatedAuthorized,
            Self::Redirect { reason: Denial::RoleMismatch { .. }, .. } => GuardState::AuthenticatedWrongRole,
            Self::Redirect { reason: Denial::MissingToken | Denial::InvalidRole, .. } => GuardState::Unauthenticated,
        }
    }

    /// Redirect target, if any.
    #[must_use]
    pub fn redirect_target(self) -> Option<Route> {
        match self {
            Self::Render => None,
            Self::Redirect { to, .. } => Some(to),
        }
    }
}

/// Decide access for a protected view.
///
/// With no `required` role any valid session renders; only missing or
/// invalid sessions are sent to login.
#[must_use]
pub fn decide(state: &SessionState, required: Option<Role>) -> Decision {
    let session = match state {
        SessionState::Empty => return Decision::Redirect { to: Route::Login, reason: Denial::MissingToken },
        SessionState::Invalid(_) => return Decision::Redirect { to: Route::Login, reason: Denial::InvalidRole },
        SessionState::Active(session) => session,
    };

    match required {
        Some(required) if required != session.role => Decision::Redirect {
            to: session.role.home(),
            reason: Denial::RoleMismatch { required, actual: session.role },
        },
        _ => Decision::Render,
    }
}

/// Decide access for a route from the route table. Public routes always render.
#[must_use]
pub fn check_route(state: &SessionState, route: Route) -> Decision {
    match route.access() {
        Access::Public => Decision::Render,
        access => decide(state, access.required_role()),
    }
}

/// Whether `role` is among `allowed`. Used for API-side role checks.
#[must_use]
pub fn permits(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
