use super::*;

#[test]
fn current_user_parses_server_json() {
    let raw = r#"{"id":"6f1c","username":"teacher@classtrack.edu","role":"teacher"}"#;
    let user: CurrentUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, Role::Teacher);
    assert_eq!(user.username, "teacher@classtrack.edu");
}

#[test]
fn current_user_rejects_unknown_role() {
    let raw = r#"{"id":"1","username":"x","role":"superuser"}"#;
    assert!(serde_json::from_str::<CurrentUser>(raw).is_err());
}

#[test]
fn token_response_parses() {
    let parsed: TokenResponse = serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
    assert_eq!(parsed.access_token, "abc");
    assert_eq!(parsed.token_type, "bearer");
}

#[test]
fn error_detail_parses() {
    let parsed: ErrorDetail = serde_json::from_str(r#"{"detail":"Incorrect username or password"}"#).unwrap();
    assert_eq!(parsed.detail, "Incorrect username or password");
}
