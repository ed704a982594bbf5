//! Admin dashboard counters.

use axum::extract::State;
use axum::response::Json;
use gate::Role;
use serde::Serialize;

use super::auth::{AuthUser, require_roles};
use super::classes::class_error_to_response;
use super::error::ApiError;
use super::users::user_error_to_response;
use crate::services::{classes, users};
use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Count {
    pub count: i64,
}

/// `GET /metrics/users/count`
pub async fn user_count(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Count>, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let count = users::count_users(&state.pool).await.map_err(|e| user_error_to_response(&e))?;
    Ok(Json(Count { count }))
}

/// `GET /metrics/classes/count`
pub async fn class_count(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Count>, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let count = classes::count_classes(&state.pool)
        .await
        .map_err(|e| class_error_to_response(&e))?;
    Ok(Json(Count { count }))
}
