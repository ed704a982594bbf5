//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto [`LoginError`]; a rejected credential or token
//! is `Authentication`, anything else is `Network`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::login::LoginError;
#[cfg(feature = "hydrate")]
use super::types::{CurrentUser, TokenResponse};

pub const TOKEN_ENDPOINT: &str = "/token";
pub const ME_ENDPOINT: &str = "/users/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-success HTTP status onto a login failure.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> LoginError {
    match status {
        400 | 401 | 403 => LoginError::Authentication,
        other => LoginError::Network(format!("unexpected status {other}")),
    }
}

/// Exchange credentials for a bearer token via form-encoded `POST /token`.
///
/// # Errors
///
/// [`LoginError::Authentication`] for rejected credentials and
/// [`LoginError::Network`] for transport or server failures.
pub async fn request_token(username: &str, password: &str) -> Result<String, LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|e| LoginError::Network(format!("{e:?}")))?;
        params.append("username", username);
        params.append("password", password);
        let resp = gloo_net::http::Request::post(TOKEN_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(params)
            .map_err(|e| LoginError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        let body: TokenResponse = resp.json().await.map_err(|e| LoginError::Network(e.to_string()))?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(LoginError::Network("not available on server".to_owned()))
    }
}

/// Fetch the role stored server-side for the account behind `token`.
///
/// # Errors
///
/// [`LoginError::Authentication`] if the token is rejected and
/// [`LoginError::Network`] otherwise.
pub async fn fetch_current_role(token: &str) -> Result<gate::Role, LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        let user: CurrentUser = resp.json().await.map_err(|e| LoginError::Network(e.to_string()))?;
        Ok(user.role)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(LoginError::Network("not available on server".to_owned()))
    }
}

/// Revoke `token` server-side. Best-effort: failures are only logged.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("server logout failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
