//! Login session tokens.
//!
//! ARCHITECTURE
//! ============
//! A successful login creates a random bearer token row with an expiry. Every
//! authenticated request resolves the token back to its user; the role
//! returned here is the one stored for the user, never one supplied by the
//! client.

use std::fmt::Write;

use gate::Role;
use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User resolved from a session token.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("stored role is invalid: {0}")]
    InvalidRole(#[from] gate::InvalidRoleError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid, ttl_minutes: i32) -> Result<String, SessionError> {
    let token = generate_token();
    sqlx::query(
        "INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, now() + make_interval(mins => $3))",
    )
    .bind(&token)
    .bind(user_id)
    .bind(ttl_minutes)
    .execute(pool)
    .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, SessionError> {
    let row = sqlx::query(
        r"SELECT u.id, u.username, u.role
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let role: String = row.get("role");
    Ok(Some(SessionUser { id: row.get("id"), username: row.get("username"), role: role.parse()? }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), SessionError> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove every session belonging to a user (after a role or password change).
pub async fn delete_user_sessions<'e, E>(executor: E, user_id: Uuid) -> Result<u64, SessionError>
where
    E: sqlx::PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Drop expired sessions. Returns the number removed.
pub async fn purge_expired(pool: &PgPool) -> Result<u64, SessionError> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Periodically purge expired sessions until the runtime shuts down.
pub fn spawn_purge_task(pool: PgPool, every: std::time::Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            match purge_expired(&pool).await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!(removed, "purged expired sessions"),
                Err(e) => tracing::warn!(error = %e, "session purge failed"),
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
