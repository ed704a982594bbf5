use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn rejected_statuses_are_authentication_failures() {
    for status in [400, 401, 403] {
        assert_eq!(status_error(status), LoginError::Authentication, "status {status}");
    }
}

#[test]
fn other_statuses_are_network_failures() {
    assert_eq!(status_error(500), LoginError::Network("unexpected status 500".to_owned()));
    assert_eq!(status_error(404), LoginError::Network("unexpected status 404".to_owned()));
}

#[test]
fn endpoints_match_server_routes() {
    assert_eq!(TOKEN_ENDPOINT, "/token");
    assert_eq!(ME_ENDPOINT, "/users/me");
    assert_eq!(LOGOUT_ENDPOINT, "/api/auth/logout");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_builds_cannot_request_tokens() {
    let result = futures::executor::block_on(request_token("a", "b"));
    assert!(matches!(result, Err(LoginError::Network(_))));
}
