use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_role_lowercase() {
    let user = SessionUser { id: Uuid::nil(), username: "admin@classtrack.edu".into(), role: Role::Admin };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["role"], "admin");
    assert_eq!(json["username"], "admin@classtrack.edu");
    assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
}

#[test]
fn invalid_stored_role_converts_to_session_error() {
    let err: SessionError = "root".parse::<Role>().unwrap_err().into();
    assert!(matches!(err, SessionError::InvalidRole(_)));
}

// =============================================================================
// live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::services::users;
    use crate::state::test_helpers::integration_pool;

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL/live Postgres"]
    async fn session_round_trip_resolves_stored_role() {
        let pool = integration_pool().await;
        let user = users::create_user(
            &pool,
            &users::NewUser { username: "t@classtrack.edu".into(), password: "secret1".into(), role: Role::Teacher },
        )
        .await
        .expect("create user");

        let token = create_session(&pool, user.id, 30).await.expect("create session");
        let resolved = validate_session(&pool, &token).await.expect("validate").expect("session exists");
        assert_eq!(resolved.role, Role::Teacher);

        delete_session(&pool, &token).await.expect("delete");
        assert!(validate_session(&pool, &token).await.expect("validate").is_none());
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL/live Postgres"]
    async fn expired_sessions_do_not_validate_and_are_purged() {
        let pool = integration_pool().await;
        let user = users::create_user(
            &pool,
            &users::NewUser { username: "s@classtrack.edu".into(), password: "secret1".into(), role: Role::Student },
        )
        .await
        .expect("create user");

        let token = create_session(&pool, user.id, -1).await.expect("create session");
        assert!(validate_session(&pool, &token).await.expect("validate").is_none());
        assert_eq!(purge_expired(&pool).await.expect("purge"), 1);
    }
}
