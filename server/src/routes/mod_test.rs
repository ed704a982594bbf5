use super::*;
use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

use crate::state::test_helpers::test_app_state;

async fn status_of(request: Request<Body>) -> StatusCode {
    let app = api_routes(test_app_state());
    app.oneshot(request).await.expect("router is infallible").status()
}

#[tokio::test]
async fn healthz_is_public() {
    let request = Request::get("/healthz").body(Body::empty()).unwrap();
    assert_eq!(status_of(request).await, StatusCode::OK);
}

#[tokio::test]
async fn me_without_bearer_is_unauthorized() {
    let request = Request::get("/users/me").body(Body::empty()).unwrap();
    assert_eq!(status_of(request).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_authorization_is_unauthorized() {
    let request = Request::get("/users/")
        .header("authorization", "Token abc")
        .body(Body::empty())
        .unwrap();
    assert_eq!(status_of(request).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_routes_require_authentication() {
    for (method, path) in [
        (Method::GET, "/classes/"),
        (Method::POST, "/assignments/"),
        (Method::POST, "/submissions/"),
        (Method::GET, "/exports/users/all"),
        (Method::GET, "/exports/classes/all"),
        (Method::GET, "/metrics/users/count"),
        (Method::POST, "/api/auth/logout"),
    ] {
        let request = Request::builder().method(method).uri(path).body(Body::empty()).unwrap();
        assert_eq!(status_of(request).await, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn unauthorized_body_carries_detail() {
    let app = api_routes(test_app_state());
    let response = app
        .oneshot(Request::get("/users/me").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["detail"], auth::NOT_AUTHENTICATED);
}

#[tokio::test]
async fn unknown_method_is_rejected() {
    let request = Request::builder().method(Method::PUT).uri("/token").body(Body::empty()).unwrap();
    assert_eq!(status_of(request).await, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn exports_are_read_only() {
    for path in ["/exports/users/all", "/exports/classes/all"] {
        let request = Request::builder().method(Method::POST).uri(path).body(Body::empty()).unwrap();
        assert_eq!(status_of(request).await, StatusCode::METHOD_NOT_ALLOWED, "{path}");
    }
}

#[tokio::test]
async fn submissions_only_accept_post() {
    let request = Request::get("/submissions/").body(Body::empty()).unwrap();
    assert_eq!(status_of(request).await, StatusCode::METHOD_NOT_ALLOWED);
}
