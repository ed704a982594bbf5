use super::*;

/// Backend that fails writes or removals for selected keys.
#[derive(Default)]
struct FlakyBackend {
    inner: MemoryBackend,
    fail_set: Option<&'static str>,
    fail_remove: Option<&'static str>,
    fail_every_remove: bool,
}

impl StorageBackend for FlakyBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_set == Some(key) {
            return Err(StoreError::Backend("quota exceeded".to_owned()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        if self.fail_every_remove || self.fail_remove == Some(key) {
            return Err(StoreError::Backend("locked".to_owned()));
        }
        self.inner.remove_item(key)
    }
}

fn memory_store() -> SessionStore<MemoryBackend> {
    SessionStore::new(MemoryBackend::new())
}

// =============================================================================
// round trips
// =============================================================================

#[test]
fn fresh_store_is_empty() {
    assert_eq!(memory_store().get_session().unwrap(), SessionState::Empty);
}

#[test]
fn set_then_get_returns_same_session() {
    let store = memory_store();
    store.set_session("t-1", "teacher").unwrap();
    assert_eq!(
        store.get_session().unwrap(),
        SessionState::Active(Session { token: "t-1".to_owned(), role: Role::Teacher })
    );
}

#[test]
fn clear_then_get_returns_empty() {
    let store = memory_store();
    store.set_session("t-1", "admin").unwrap();
    store.clear_session().unwrap();
    assert_eq!(store.get_session().unwrap(), SessionState::Empty);
    assert_eq!(store.backend().get_item(TOKEN_KEY).unwrap(), None);
    assert_eq!(store.backend().get_item(ROLE_KEY).unwrap(), None);
}

#[test]
fn clear_on_empty_store_is_ok() {
    assert!(memory_store().clear_session().is_ok());
}

#[test]
fn set_overwrites_previous_session() {
    let store = memory_store();
    store.set_session("old", "student").unwrap();
    store.store_session("new", Role::Admin).unwrap();
    assert_eq!(store.get_session().unwrap().token(), Some("new"));
    assert_eq!(store.get_session().unwrap().role(), Some(Role::Admin));
}

#[test]
fn values_land_under_fixed_keys() {
    let store = memory_store();
    store.set_session("abc", "student").unwrap();
    assert_eq!(store.backend().get_item("authToken").unwrap().as_deref(), Some("abc"));
    assert_eq!(store.backend().get_item("userRole").unwrap().as_deref(), Some("student"));
}

// =============================================================================
// validation
// =============================================================================

#[test]
fn invalid_role_is_rejected_and_nothing_written() {
    let store = memory_store();
    let err = store.set_session("abc", "superuser").unwrap_err();
    assert_eq!(err, SessionError::InvalidRole(InvalidRoleError("superuser".to_owned())));
    assert_eq!(store.backend().get_item(TOKEN_KEY).unwrap(), None);
    assert_eq!(store.get_session().unwrap(), SessionState::Empty);
}

#[test]
fn blank_token_is_rejected() {
    let store = memory_store();
    assert_eq!(store.set_session("  ", "admin").unwrap_err(), SessionError::EmptyToken);
    assert_eq!(store.get_session().unwrap(), SessionState::Empty);
}

// =============================================================================
// partial writes
// =============================================================================

#[test]
fn failed_role_write_removes_token() {
    let store = SessionStore::new(FlakyBackend { fail_set: Some(ROLE_KEY), ..FlakyBackend::default() });
    let err = store.set_session("abc", "teacher").unwrap_err();
    assert!(matches!(err, SessionError::Store(StoreError::Backend(_))));
    assert_eq!(store.backend().get_item(TOKEN_KEY).unwrap(), None);
    assert_eq!(store.get_session().unwrap(), SessionState::Empty);
}

#[test]
fn failed_role_write_does_not_leave_stale_role_with_new_token() {
    let backend = FlakyBackend::default();
    backend.inner.set_item(TOKEN_KEY, "old").unwrap();
    backend.inner.set_item(ROLE_KEY, "admin").unwrap();
    let store = SessionStore::new(FlakyBackend { fail_set: Some(ROLE_KEY), ..backend });
    assert!(store.set_session("new", "student").is_err());
    assert_eq!(store.get_session().unwrap(), SessionState::Empty);
}

#[test]
fn failed_token_write_never_reactivates_previous_session() {
    let backend = FlakyBackend::default();
    backend.inner.set_item(TOKEN_KEY, "old").unwrap();
    backend.inner.set_item(ROLE_KEY, "admin").unwrap();
    let store = SessionStore::new(FlakyBackend { fail_set: Some(TOKEN_KEY), ..backend });
    assert!(store.set_session("new", "student").is_err());
    assert_eq!(store.get_session().unwrap(), SessionState::Empty);
}

#[test]
fn failed_role_write_with_failing_removes_is_not_active() {
    let backend = FlakyBackend::default();
    backend.inner.set_item(TOKEN_KEY, "old").unwrap();
    backend.inner.set_item(ROLE_KEY, "admin").unwrap();
    let store = SessionStore::new(FlakyBackend { fail_set: Some(ROLE_KEY), fail_every_remove: true, ..backend });

    assert!(store.set_session("new", "student").is_err());
    let state = store.get_session().unwrap();
    assert!(!matches!(state, SessionState::Active(_)), "partial write left {state:?}");
    assert_eq!(state, SessionState::Empty);
}

#[test]
fn failed_role_removal_discards_previous_session() {
    let backend = FlakyBackend::default();
    backend.inner.set_item(TOKEN_KEY, "old").unwrap();
    backend.inner.set_item(ROLE_KEY, "admin").unwrap();
    let store = SessionStore::new(FlakyBackend { fail_remove: Some(ROLE_KEY), ..backend });

    assert!(store.set_session("new", "student").is_err());
    assert_eq!(store.backend().get_item(TOKEN_KEY).unwrap(), None);
    assert_eq!(store.get_session().unwrap(), SessionState::Empty);
}

#[test]
fn failed_role_write_with_failing_token_removal_blanks_token() {
    let store = SessionStore::new(FlakyBackend {
        fail_set: Some(ROLE_KEY),
        fail_remove: Some(TOKEN_KEY),
        ..FlakyBackend::default()
    });
    assert!(store.set_session("new", "teacher").is_err());
    assert_eq!(store.backend().get_item(TOKEN_KEY).unwrap().as_deref(), Some(""));
    assert_eq!(store.get_session().unwrap(), SessionState::Empty);
}

#[test]
fn clear_attempts_both_keys_when_first_fails() {
    let store = SessionStore::new(FlakyBackend { fail_remove: Some(TOKEN_KEY), ..FlakyBackend::default() });
    store.set_session("abc", "admin").unwrap();
    assert!(store.clear_session().is_err());
    assert_eq!(store.backend().get_item(ROLE_KEY).unwrap(), None);
    assert!(matches!(store.get_session().unwrap(), SessionState::Invalid(_)));
}

// =============================================================================
// from_parts
// =============================================================================

#[test]
fn from_parts_without_token_is_empty_even_with_role() {
    assert_eq!(SessionState::from_parts(None, Some("admin")), SessionState::Empty);
    assert_eq!(SessionState::from_parts(Some(""), Some("admin")), SessionState::Empty);
}

#[test]
fn from_parts_token_without_role_is_invalid() {
    assert_eq!(
        SessionState::from_parts(Some("abc"), None),
        SessionState::Invalid(InvalidSession { token: "abc".to_owned(), role: None })
    );
}

#[test]
fn from_parts_unrecognized_role_is_invalid() {
    let state = SessionState::from_parts(Some("abc"), Some("superuser"));
    assert_eq!(
        state,
        SessionState::Invalid(InvalidSession { token: "abc".to_owned(), role: Some("superuser".to_owned()) })
    );
    assert_eq!(state.role(), None);
    assert_eq!(state.token(), None);
}

#[test]
fn tampered_role_in_storage_reads_as_invalid() {
    let store = memory_store();
    store.set_session("abc", "student").unwrap();
    store.backend().set_item(ROLE_KEY, "superuser").unwrap();
    assert!(matches!(store.get_session().unwrap(), SessionState::Invalid(_)));
}
