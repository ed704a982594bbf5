//! Assignments posted to a class by its staff.

use gate::Role;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::SessionUser;

/// Roles allowed to create assignments.
pub const AUTHOR_ROLES: [Role; 2] = [Role::Teacher, Role::Admin];

#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error("Assignment name cannot be empty")]
    EmptyName,
    #[error("Class with ID {0} not found")]
    ClassNotFound(Uuid),
    #[error("Only teachers and administrators can create assignments")]
    Forbidden,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAssignment {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub class_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub class_id: Uuid,
    pub creator_id: Uuid,
}

/// Trimmed name and description; a blank description becomes `None`.
pub fn normalize_assignment(input: &NewAssignment) -> Result<NewAssignment, AssignmentError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AssignmentError::EmptyName);
    }
    let description = input
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_owned);
    Ok(NewAssignment { name: name.to_owned(), description, class_id: input.class_id })
}

pub async fn create_assignment(
    pool: &PgPool,
    creator: &SessionUser,
    input: &NewAssignment,
) -> Result<AssignmentRecord, AssignmentError> {
    if !gate::permits(creator.role, &AUTHOR_ROLES) {
        return Err(AssignmentError::Forbidden);
    }
    let input = normalize_assignment(input)?;

    let class_exists = sqlx::query("SELECT 1 FROM classes WHERE id = $1")
        .bind(input.class_id)
        .fetch_optional(pool)
        .await?
        .is_some();
    if !class_exists {
        return Err(AssignmentError::ClassNotFound(input.class_id));
    }

    let row = sqlx::query(
        r"INSERT INTO assignments (name, description, class_id, creator_id)
          VALUES ($1, $2, $3, $4)
          RETURNING id, name, description, class_id, creator_id",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.class_id)
    .bind(creator.id)
    .fetch_one(pool)
    .await?;

    tracing::info!(class_id = %input.class_id, creator = %creator.id, "assignment created");
    Ok(AssignmentRecord {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        class_id: row.get("class_id"),
        creator_id: row.get("creator_id"),
    })
}

#[cfg(test)]
#[path = "assignments_test.rs"]
mod tests;
