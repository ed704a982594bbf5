use super::*;

#[tokio::test]
async fn clones_share_config() {
    let state = test_helpers::test_app_state();
    let cloned = state.clone();
    assert!(Arc::ptr_eq(&state.config, &cloned.config));
}

#[tokio::test]
async fn session_ttl_comes_from_config() {
    let state = test_helpers::test_app_state();
    assert_eq!(state.session_ttl_minutes(), crate::config::DEFAULT_SESSION_TTL_MINUTES);
}
