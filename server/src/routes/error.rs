//! JSON error bodies shared by every API handler.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// `{"detail": "..."}` body returned with every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { detail: detail.into() }))
}

/// 500 with a fixed message; the underlying cause is logged, never returned.
pub fn internal(err: &dyn std::fmt::Display) -> ApiError {
    tracing::error!(error = %err, "request failed");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
