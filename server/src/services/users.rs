//! User accounts: credential checks, admin CRUD, demo seeding.

use gate::Role;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{password, session};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Demo accounts created when `SEED_DEMO_USERS` is enabled.
pub const DEMO_USERS: [(&str, Role); 3] = [
    ("admin@classtrack.edu", Role::Admin),
    ("teacher@classtrack.edu", Role::Teacher),
    ("student@classtrack.edu", Role::Student),
];
pub const DEMO_PASSWORD: &str = "password123";

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Username must be at least 3 characters long")]
    InvalidUsername,
    #[error("Password must be at least 6 characters long")]
    InvalidPassword,
    #[error("Username already registered")]
    UsernameTaken,
    #[error("User not found")]
    NotFound(Uuid),
    #[error("Administrators cannot delete their own account")]
    SelfDelete,
    #[error("stored role is invalid: {0}")]
    InvalidRole(#[from] gate::InvalidRoleError),
    #[error("session error: {0}")]
    Session(#[from] session::SessionError),
    #[error(transparent)]
    Password(#[from] password::PasswordError),
    #[error("database error: {0}")]
    Db(sqlx::Error),
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return Self::UsernameTaken;
            }
        }
        Self::Db(err)
    }
}

/// Public view of a user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

impl UserUpdate {
    /// Whether applying this update must revoke the user's sessions.
    #[must_use]
    pub fn revokes_sessions(&self) -> bool {
        self.password.is_some() || self.role.is_some()
    }
}

/// Trim and length-check a username.
pub fn validate_username(raw: &str) -> Result<String, UserError> {
    let username = raw.trim();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(UserError::InvalidUsername);
    }
    Ok(username.to_owned())
}

pub fn validate_password(raw: &str) -> Result<(), UserError> {
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err(UserError::InvalidPassword);
    }
    Ok(())
}

fn user_from_row(row: &PgRow) -> Result<UserRecord, UserError> {
    let role: String = row.get("role");
    Ok(UserRecord { id: row.get("id"), username: row.get("username"), role: role.parse()? })
}

/// Check credentials. `None` covers both an unknown username and a wrong password.
pub async fn authenticate(pool: &PgPool, username: &str, password: &str) -> Result<Option<UserRecord>, UserError> {
    let row = sqlx::query("SELECT id, username, role, password_hash FROM users WHERE username = $1")
        .bind(username.trim())
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let stored: String = row.get("password_hash");
    if !password::verify_password(password, &stored) {
        return Ok(None);
    }
    user_from_row(&row).map(Some)
}

pub async fn create_user(pool: &PgPool, new_user: &NewUser) -> Result<UserRecord, UserError> {
    let username = validate_username(&new_user.username)?;
    validate_password(&new_user.password)?;

    let row = sqlx::query(
        r"INSERT INTO users (username, password_hash, role)
          VALUES ($1, $2, $3)
          RETURNING id, username, role",
    )
    .bind(&username)
    .bind(password::hash_password(&new_user.password)?)
    .bind(new_user.role.as_str())
    .fetch_one(pool)
    .await?;
    user_from_row(&row)
}

pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRecord>, UserError> {
    let rows = sqlx::query("SELECT id, username, role FROM users ORDER BY created_at, username")
        .fetch_all(pool)
        .await?;
    rows.iter().map(user_from_row).collect()
}

pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<UserRecord, UserError> {
    let row = sqlx::query("SELECT id, username, role FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or(UserError::NotFound(user_id))?;
    user_from_row(&row)
}

/// Apply a partial update. Changing the password or role revokes the user's
/// existing sessions so the new role takes effect on next login. The update
/// and the revocation commit together or not at all.
pub async fn update_user(pool: &PgPool, user_id: Uuid, update: &UserUpdate) -> Result<UserRecord, UserError> {
    let username = update.username.as_deref().map(validate_username).transpose()?;
    let password_hash = match &update.password {
        Some(new_password) => {
            validate_password(new_password)?;
            Some(password::hash_password(new_password)?)
        }
        None => None,
    };

    let mut tx = pool.begin().await?;
    let revoked = if update.revokes_sessions() {
        session::delete_user_sessions(tx.as_mut(), user_id).await?
    } else {
        0
    };

    let row = sqlx::query(
        r"UPDATE users SET
              username = COALESCE($2, username),
              password_hash = COALESCE($3, password_hash),
              role = COALESCE($4, role)
          WHERE id = $1
          RETURNING id, username, role",
    )
    .bind(user_id)
    .bind(username)
    .bind(password_hash)
    .bind(update.role.map(Role::as_str))
    .fetch_optional(tx.as_mut())
    .await?
    .ok_or(UserError::NotFound(user_id))?;
    let record = user_from_row(&row)?;
    tx.commit().await?;

    if update.revokes_sessions() {
        tracing::info!(%user_id, revoked, "revoked sessions after credential change");
    }
    Ok(record)
}

/// Delete a user. `acting_user` may not delete themselves.
pub async fn delete_user(pool: &PgPool, user_id: Uuid, acting_user: Uuid) -> Result<(), UserError> {
    if user_id == acting_user {
        return Err(UserError::SelfDelete);
    }
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(UserError::NotFound(user_id));
    }
    Ok(())
}

pub async fn count_users(pool: &PgPool) -> Result<i64, UserError> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM users").fetch_one(pool).await?;
    Ok(row.get("count"))
}

/// Create the demo accounts that do not exist yet. Returns how many were created.
pub async fn seed_demo_users(pool: &PgPool) -> Result<usize, UserError> {
    let mut created = 0;
    for (username, role) in DEMO_USERS {
        let password_hash = password::hash_password(DEMO_PASSWORD)?;
        let result = sqlx::query(
            r"INSERT INTO users (username, password_hash, role)
              VALUES ($1, $2, $3)
              ON CONFLICT (username) DO NOTHING",
        )
        .bind(username)
        .bind(password_hash)
        .bind(role.as_str())
        .execute(pool)
        .await?;
        if result.rows_affected() > 0 {
            tracing::info!(username, %role, "seeded demo user");
            created += 1;
        }
    }
    Ok(created)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
