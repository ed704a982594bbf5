//! Wire DTOs for the client/server auth boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use gate::Role;
use serde::{Deserialize, Serialize};

/// Response of `POST /token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Response of `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Values submitted from the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
    /// Role picked on the form.
    pub role: Role,
}
