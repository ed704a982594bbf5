//! Assignment routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::{AuthUser, require_roles};
use super::error::{ApiError, api_error, internal};
use crate::services::assignments::{self, AUTHOR_ROLES, AssignmentError, AssignmentRecord, NewAssignment};
use crate::state::AppState;

pub(crate) fn assignment_error_to_response(err: &AssignmentError) -> ApiError {
    match err {
        AssignmentError::EmptyName => api_error(StatusCode::BAD_REQUEST, err.to_string()),
        AssignmentError::ClassNotFound(_) => api_error(StatusCode::NOT_FOUND, err.to_string()),
        AssignmentError::Forbidden => api_error(StatusCode::FORBIDDEN, err.to_string()),
        AssignmentError::Db(_) => internal(err),
    }
}

/// `POST /assignments/`: teachers and admins only.
pub async fn create_assignment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewAssignment>,
) -> Result<(StatusCode, Json<AssignmentRecord>), ApiError> {
    require_roles(&auth, &AUTHOR_ROLES)?;
    let assignment = assignments::create_assignment(&state.pool, &auth.user, &body)
        .await
        .map_err(|e| assignment_error_to_response(&e))?;
    Ok((StatusCode::CREATED, Json(assignment)))
}
