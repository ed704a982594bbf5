//! Class catalogue managed by administrators.

use gate::Role;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub const MIN_CODE_LEN: usize = 3;
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ClassError {
    #[error("Class name cannot be empty")]
    EmptyName,
    #[error("Class code must be at least 3 characters long")]
    ShortCode,
    #[error("A class with this name already exists")]
    DuplicateName,
    #[error("A class with this code already exists")]
    DuplicateCode,
    #[error("Teacher with ID {0} not found")]
    TeacherNotFound(Uuid),
    #[error("User with ID {0} is not a teacher")]
    NotATeacher(Uuid),
    #[error("Class not found")]
    NotFound(Uuid),
    #[error("stored role is invalid: {0}")]
    InvalidRole(#[from] gate::InvalidRoleError),
    #[error("database error: {0}")]
    Db(sqlx::Error),
}

impl From<sqlx::Error> for ClassError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return if db.constraint().is_some_and(|c| c.contains("code")) {
                    Self::DuplicateCode
                } else {
                    Self::DuplicateName
                };
            }
        }
        Self::Db(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub teacher_id: Option<Uuid>,
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassInput {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub teacher_id: Option<Uuid>,
}

/// `skip`/`limit` query parameters for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: DEFAULT_PAGE_LIMIT }
    }
}

impl Page {
    /// Clamp to a non-negative offset and a limit in `1..=DEFAULT_PAGE_LIMIT`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self { skip: self.skip.max(0), limit: self.limit.clamp(1, DEFAULT_PAGE_LIMIT) }
    }
}

/// Trim the name, trim and uppercase the code, and check both.
pub fn normalize_input(input: &ClassInput) -> Result<ClassInput, ClassError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ClassError::EmptyName);
    }
    let code = input.code.trim().to_uppercase();
    if code.chars().count() < MIN_CODE_LEN {
        return Err(ClassError::ShortCode);
    }
    Ok(ClassInput { name: name.to_owned(), code, teacher_id: input.teacher_id })
}

fn class_from_row(row: &PgRow) -> ClassRecord {
    ClassRecord { id: row.get("id"), name: row.get("name"), code: row.get("code"), teacher_id: row.get("teacher_id") }
}

async fn ensure_teacher(pool: &PgPool, teacher_id: Uuid) -> Result<(), ClassError> {
    let row = sqlx::query("SELECT role FROM users WHERE id = $1")
        .bind(teacher_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ClassError::TeacherNotFound(teacher_id))?;
    let role: Role = row.get::<String, _>("role").parse()?;
    if role != Role::Teacher {
        return Err(ClassError::NotATeacher(teacher_id));
    }
    Ok(())
}

pub async fn create_class(pool: &PgPool, input: &ClassInput) -> Result<ClassRecord, ClassError> {
    let input = normalize_input(input)?;
    if let Some(teacher_id) = input.teacher_id {
        ensure_teacher(pool, teacher_id).await?;
    }

    let row = sqlx::query(
        r"INSERT INTO classes (name, code, teacher_id)
          VALUES ($1, $2, $3)
          RETURNING id, name, code, teacher_id",
    )
    .bind(&input.name)
    .bind(&input.code)
    .bind(input.teacher_id)
    .fetch_one(pool)
    .await?;
    Ok(class_from_row(&row))
}

pub async fn list_classes(pool: &PgPool, page: Page) -> Result<Vec<ClassRecord>, ClassError> {
    let page = page.clamped();
    let rows = sqlx::query("SELECT id, name, code, teacher_id FROM classes ORDER BY code OFFSET $1 LIMIT $2")
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(class_from_row).collect())
}

/// Every class, unpaged. Backs the admin export.
pub async fn list_all_classes(pool: &PgPool) -> Result<Vec<ClassRecord>, ClassError> {
    let rows = sqlx::query("SELECT id, name, code, teacher_id FROM classes ORDER BY code")
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(class_from_row).collect())
}

pub async fn get_class(pool: &PgPool, class_id: Uuid) -> Result<ClassRecord, ClassError> {
    let row = sqlx::query("SELECT id, name, code, teacher_id FROM classes WHERE id = $1")
        .bind(class_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ClassError::NotFound(class_id))?;
    Ok(class_from_row(&row))
}

/// Replace name, code and teacher of an existing class.
pub async fn update_class(pool: &PgPool, class_id: Uuid, input: &ClassInput) -> Result<ClassRecord, ClassError> {
    let input = normalize_input(input)?;
    if let Some(teacher_id) = input.teacher_id {
        ensure_teacher(pool, teacher_id).await?;
    }

    let row = sqlx::query(
        r"UPDATE classes SET name = $2, code = $3, teacher_id = $4
          WHERE id = $1
          RETURNING id, name, code, teacher_id",
    )
    .bind(class_id)
    .bind(&input.name)
    .bind(&input.code)
    .bind(input.teacher_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ClassError::NotFound(class_id))?;
    Ok(class_from_row(&row))
}

pub async fn delete_class(pool: &PgPool, class_id: Uuid) -> Result<(), ClassError> {
    let result = sqlx::query("DELETE FROM classes WHERE id = $1")
        .bind(class_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ClassError::NotFound(class_id));
    }
    Ok(())
}

pub async fn count_classes(pool: &PgPool) -> Result<i64, ClassError> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM classes").fetch_one(pool).await?;
    Ok(row.get("count"))
}

#[cfg(test)]
#[path = "classes_test.rs"]
mod tests;
