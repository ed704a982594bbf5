//! Student submission routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::AuthUser;
use super::error::{ApiError, api_error, internal};
use crate::services::submissions::{self, NewSubmission, SubmissionError, SubmissionRecord};
use crate::state::AppState;

pub(crate) fn submission_error_to_response(err: &SubmissionError) -> ApiError {
    match err {
        SubmissionError::Forbidden | SubmissionError::NotOwner => api_error(StatusCode::FORBIDDEN, err.to_string()),
        SubmissionError::AssignmentNotFound(_) | SubmissionError::NegativeTimeSpent => {
            api_error(StatusCode::BAD_REQUEST, err.to_string())
        }
        SubmissionError::Db(_) => internal(err),
    }
}

/// `POST /submissions/`: students only, for their own `student_id`.
pub async fn create_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewSubmission>,
) -> Result<(StatusCode, Json<SubmissionRecord>), ApiError> {
    let submission = submissions::create_submission(&state.pool, &auth.user, &body)
        .await
        .map_err(|e| submission_error_to_response(&e))?;
    Ok((StatusCode::CREATED, Json(submission)))
}
