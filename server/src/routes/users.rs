//! Admin user management routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use gate::Role;
use uuid::Uuid;

use super::auth::{AuthUser, require_roles};
use super::error::{ApiError, api_error, internal};
use crate::services::users::{self, NewUser, UserError, UserRecord, UserUpdate};
use crate::state::AppState;

pub(crate) fn user_error_to_response(err: &UserError) -> ApiError {
    match err {
        UserError::InvalidUsername | UserError::InvalidPassword | UserError::UsernameTaken | UserError::SelfDelete => {
            api_error(StatusCode::BAD_REQUEST, err.to_string())
        }
        UserError::NotFound(_) => api_error(StatusCode::NOT_FOUND, err.to_string()),
        UserError::InvalidRole(_) | UserError::Session(_) | UserError::Password(_) | UserError::Db(_) => {
            internal(err)
        }
    }
}

/// `GET /users/`: every account.
pub async fn list_users(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<UserRecord>>, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let rows = users::list_users(&state.pool).await.map_err(|e| user_error_to_response(&e))?;
    Ok(Json(rows))
}

/// `POST /users/`: create an account with an explicit role.
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewUser>,
) -> Result<(StatusCode, Json<UserRecord>), ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let user = users::create_user(&state.pool, &body).await.map_err(|e| user_error_to_response(&e))?;
    tracing::info!(user_id = %user.id, role = %user.role, by = %auth.user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserRecord>, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let user = users::get_user(&state.pool, user_id).await.map_err(|e| user_error_to_response(&e))?;
    Ok(Json(user))
}

/// `PATCH /users/{id}`: partial update.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UserUpdate>,
) -> Result<Json<UserRecord>, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let user = users::update_user(&state.pool, user_id, &body)
        .await
        .map_err(|e| user_error_to_response(&e))?;
    Ok(Json(user))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    users::delete_user(&state.pool, user_id, auth.user.id)
        .await
        .map_err(|e| user_error_to_response(&e))?;
    tracing::info!(%user_id, by = %auth.user.id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
