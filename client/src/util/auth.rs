//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected views and the login/logout flows must apply identical redirect
//! behavior: navigation replaces the current history entry, so the back
//! button never returns to a view the guard refused.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::{Decision, Denial, Role, Route};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Navigation options for every guard-driven redirect.
#[must_use]
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Path a signed-in visitor with `role` is sent to.
#[must_use]
pub fn home_path(role: Role) -> &'static str {
    role.home().path()
}

/// Where to send the visitor for `decision`, if anywhere.
#[must_use]
pub fn redirect_path(decision: Decision) -> Option<&'static str> {
    decision.redirect_target().map(Route::path)
}

fn log_denial(route: Route, reason: Denial) {
    match reason {
        Denial::MissingToken => log::debug!("{}: no session, redirecting to login", route.path()),
        Denial::InvalidRole => log::warn!("{}: stored role is not recognized, redirecting to login", route.path()),
        Denial::RoleMismatch { required, actual } => {
            log::debug!("{}: requires {required}, session is {actual}", route.path());
        }
    }
}

/// Re-run the guard for `route` on every auth change and navigate away when
/// it refuses. Nothing happens while the store is still loading.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, route: Route, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let Some(decision) = auth.with(|state| state.decision(route)) else {
            return;
        };
        if let Decision::Redirect { reason, .. } = decision {
            log_denial(route, reason);
        }
        if let Some(path) = redirect_path(decision) {
            navigate(path, replace_options());
        }
    });
}
