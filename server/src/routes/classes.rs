//! Admin class management routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use gate::Role;
use uuid::Uuid;

use super::auth::{AuthUser, require_roles};
use super::error::{ApiError, api_error, internal};
use crate::services::classes::{self, ClassError, ClassInput, ClassRecord, Page};
use crate::state::AppState;

pub(crate) fn class_error_to_response(err: &ClassError) -> ApiError {
    match err {
        ClassError::EmptyName
        | ClassError::ShortCode
        | ClassError::DuplicateName
        | ClassError::DuplicateCode
        | ClassError::NotATeacher(_) => api_error(StatusCode::BAD_REQUEST, err.to_string()),
        ClassError::TeacherNotFound(_) | ClassError::NotFound(_) => api_error(StatusCode::NOT_FOUND, err.to_string()),
        ClassError::InvalidRole(_) | ClassError::Db(_) => internal(err),
    }
}

/// `GET /classes/?skip=&limit=`
pub async fn list_classes(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<Page>,
) -> Result<Json<Vec<ClassRecord>>, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let rows = classes::list_classes(&state.pool, page)
        .await
        .map_err(|e| class_error_to_response(&e))?;
    Ok(Json(rows))
}

/// `GET /exports/classes/all`: every class, ignoring paging.
pub async fn export_classes(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<ClassRecord>>, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let rows = classes::list_all_classes(&state.pool)
        .await
        .map_err(|e| class_error_to_response(&e))?;
    tracing::info!(count = rows.len(), by = %auth.user.id, "classes exported");
    Ok(Json(rows))
}

/// `POST /classes/`
pub async fn create_class(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ClassInput>,
) -> Result<(StatusCode, Json<ClassRecord>), ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let class = classes::create_class(&state.pool, &body)
        .await
        .map_err(|e| class_error_to_response(&e))?;
    tracing::info!(class_id = %class.id, code = %class.code, "class created");
    Ok((StatusCode::CREATED, Json(class)))
}

/// `GET /classes/{id}`
pub async fn get_class(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(class_id): Path<Uuid>,
) -> Result<Json<ClassRecord>, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let class = classes::get_class(&state.pool, class_id)
        .await
        .map_err(|e| class_error_to_response(&e))?;
    Ok(Json(class))
}

/// `PATCH /classes/{id}`
pub async fn update_class(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(class_id): Path<Uuid>,
    Json(body): Json<ClassInput>,
) -> Result<Json<ClassRecord>, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    let class = classes::update_class(&state.pool, class_id, &body)
        .await
        .map_err(|e| class_error_to_response(&e))?;
    Ok(Json(class))
}

/// `DELETE /classes/{id}`
pub async fn delete_class(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(class_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_roles(&auth, &[Role::Admin])?;
    classes::delete_class(&state.pool, class_id)
        .await
        .map_err(|e| class_error_to_response(&e))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "classes_test.rs"]
mod tests;
