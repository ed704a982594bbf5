use super::*;
use gate::{Denial, Session};

fn active(role: Role) -> SessionState {
    SessionState::Active(Session { token: "tok".into(), role })
}

#[test]
fn default_state_is_loading_and_empty() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.session, SessionState::Empty);
}

#[test]
fn no_decision_while_loading() {
    let state = AuthState { session: SessionState::Empty, loading: true };
    assert_eq!(state.decision(Route::AdminDashboard), None);
}

#[test]
fn loaded_empty_state_redirects_to_login() {
    let state = AuthState::loaded(SessionState::Empty);
    assert_eq!(
        state.decision(Route::TeacherDashboard),
        Some(Decision::Redirect { to: Route::Login, reason: Denial::MissingToken })
    );
}

#[test]
fn loaded_matching_role_renders() {
    let state = AuthState::loaded(active(Role::Student));
    assert_eq!(state.decision(Route::StudentDashboard), Some(Decision::Render));
    assert_eq!(state.decision(Route::Dashboard), Some(Decision::Render));
}

#[test]
fn loaded_wrong_role_redirects_home() {
    let state = AuthState::loaded(active(Role::Teacher));
    assert_eq!(
        state.decision(Route::AdminUsers).and_then(Decision::redirect_target),
        Some(Route::TeacherDashboard)
    );
}

#[test]
fn role_reads_active_session_only() {
    assert_eq!(AuthState::loaded(active(Role::Admin)).role(), Some(Role::Admin));
    assert_eq!(AuthState::default().role(), None);
}

#[test]
fn role_policy_defaults_to_backend_verification() {
    assert_eq!(RolePolicy::default(), RolePolicy::VerifyWithBackend);
}

// =============================================================================
// refresh_from_store
// =============================================================================

fn store_with(token: &str, role: &str) -> SessionStore<gate::MemoryBackend> {
    let store = SessionStore::new(gate::MemoryBackend::new());
    store.set_session(token, role).unwrap();
    store
}

#[test]
fn refresh_is_none_when_store_matches() {
    let store = store_with("tok", "admin");
    let current = AuthState::loaded(active(Role::Admin));
    assert_eq!(refresh_from_store(&store, &current), None);
}

#[test]
fn refresh_sees_tampered_role_and_redirects_to_login() {
    let store = store_with("tok", "admin");
    let current = AuthState::loaded(active(Role::Admin));
    store.backend().set_item(gate::ROLE_KEY, "superuser").unwrap();

    let next = refresh_from_store(&store, &current).expect("state changed");
    assert_eq!(
        next.decision(Route::AdminUsers),
        Some(Decision::Redirect { to: Route::Login, reason: Denial::InvalidRole })
    );
}

#[test]
fn refresh_sees_logout_from_another_tab() {
    let store = store_with("tok", "teacher");
    let current = AuthState::loaded(active(Role::Teacher));
    store.clear_session().unwrap();

    let next = refresh_from_store(&store, &current).expect("state changed");
    assert_eq!(next.session, SessionState::Empty);
    assert_eq!(
        next.decision(Route::TeacherDashboard),
        Some(Decision::Redirect { to: Route::Login, reason: Denial::MissingToken })
    );
}

#[test]
fn refresh_finishes_loading() {
    let store = SessionStore::new(gate::MemoryBackend::new());
    let next = refresh_from_store(&store, &AuthState::default()).expect("loading ends");
    assert!(!next.loading);
}

#[test]
fn read_session_returns_stored_session() {
    let store = store_with("tok", "student");
    assert_eq!(read_session(&store), active(Role::Student));
}
