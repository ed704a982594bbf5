//! Auth routes: password login, current user, logout, and the bearer extractor.

use axum::extract::{Form, FromRef, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use gate::Role;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, api_error, internal};
use crate::services::{session, users};
use crate::state::AppState;

pub const TOKEN_TYPE: &str = "bearer";
pub const BAD_CREDENTIALS: &str = "Incorrect username or password";
pub const NOT_AUTHENTICATED: &str = "Could not validate credentials";
pub const FORBIDDEN: &str = "Not enough permissions";

/// Extract the token from an `Authorization: Bearer <token>` header.
/// The scheme is matched case-insensitively; an empty token is treated as absent.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user resolved from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Err(api_error(StatusCode::UNAUTHORIZED, NOT_AUTHENTICATED));
        };

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| internal(&e))?
            .ok_or_else(|| api_error(StatusCode::UNAUTHORIZED, NOT_AUTHENTICATED))?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// 403 unless the caller's stored role is one of `allowed`.
pub fn require_roles(auth: &AuthUser, allowed: &[Role]) -> Result<(), ApiError> {
    if gate::permits(auth.user.role, allowed) {
        return Ok(());
    }
    tracing::debug!(user_id = %auth.user.id, role = %auth.user.role, ?allowed, "role not permitted");
    Err(api_error(StatusCode::FORBIDDEN, FORBIDDEN))
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// `POST /token`: exchange form credentials for a bearer token.
pub async fn token(State(state): State<AppState>, Form(form): Form<TokenForm>) -> Result<Json<TokenResponse>, ApiError> {
    let user = users::authenticate(&state.pool, &form.username, &form.password)
        .await
        .map_err(|e| internal(&e))?;
    let Some(user) = user else {
        tracing::info!(username = %form.username.trim(), "login rejected");
        return Err(api_error(StatusCode::BAD_REQUEST, BAD_CREDENTIALS));
    };

    let access_token = session::create_session(&state.pool, user.id, state.session_ttl_minutes())
        .await
        .map_err(|e| internal(&e))?;
    tracing::info!(user_id = %user.id, role = %user.role, "login succeeded");
    Ok(Json(TokenResponse { access_token, token_type: TOKEN_TYPE }))
}

/// `GET /users/me`: return the current user with the role stored server-side.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete the session behind the bearer token.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> Result<StatusCode, ApiError> {
    session::delete_session(&state.pool, &auth.token)
        .await
        .map_err(|e| internal(&e))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
