//! Student submissions against an assignment.
//!
//! Only students submit, and only on their own behalf. The role check runs
//! before the ownership check so a staff caller never learns whether the
//! `student_id` they sent would have matched.

use gate::Role;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::SessionUser;

/// Roles allowed to create submissions.
pub const SUBMITTER_ROLES: [Role; 1] = [Role::Student];

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Not authorized to create submissions")]
    Forbidden,
    #[error("Student ID must match the authenticated user's ID")]
    NotOwner,
    #[error("Assignment with ID {0} not found")]
    AssignmentNotFound(Uuid),
    #[error("Time spent must be zero or more minutes")]
    NegativeTimeSpent,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSubmission {
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub time_spent_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub grade: Option<f64>,
    pub time_spent_minutes: i32,
    /// Unix epoch milliseconds.
    pub submitted_at: i64,
}

fn submission_from_row(row: &PgRow) -> SubmissionRecord {
    SubmissionRecord {
        id: row.get("id"),
        assignment_id: row.get("assignment_id"),
        student_id: row.get("student_id"),
        grade: row.get("grade"),
        time_spent_minutes: row.get("time_spent_minutes"),
        submitted_at: row.get("submitted_at_ms"),
    }
}

/// Role, ownership and input checks, in that order.
pub fn check_submission(submitter: &SessionUser, input: &NewSubmission) -> Result<(), SubmissionError> {
    if !gate::permits(submitter.role, &SUBMITTER_ROLES) {
        return Err(SubmissionError::Forbidden);
    }
    if input.student_id != submitter.id {
        return Err(SubmissionError::NotOwner);
    }
    if input.time_spent_minutes < 0 {
        return Err(SubmissionError::NegativeTimeSpent);
    }
    Ok(())
}

pub async fn create_submission(
    pool: &PgPool,
    submitter: &SessionUser,
    input: &NewSubmission,
) -> Result<SubmissionRecord, SubmissionError> {
    check_submission(submitter, input)?;

    let assignment_exists = sqlx::query("SELECT 1 FROM assignments WHERE id = $1")
        .bind(input.assignment_id)
        .fetch_optional(pool)
        .await?
        .is_some();
    if !assignment_exists {
        return Err(SubmissionError::AssignmentNotFound(input.assignment_id));
    }

    let row = sqlx::query(
        r"INSERT INTO submissions (assignment_id, student_id, time_spent_minutes)
          VALUES ($1, $2, $3)
          RETURNING id, assignment_id, student_id, grade, time_spent_minutes,
                    (EXTRACT(EPOCH FROM submitted_at) * 1000)::BIGINT AS submitted_at_ms",
    )
    .bind(input.assignment_id)
    .bind(input.student_id)
    .bind(input.time_spent_minutes)
    .fetch_one(pool)
    .await?;

    tracing::info!(assignment_id = %input.assignment_id, student = %submitter.id, "submission created");
    Ok(submission_from_row(&row))
}

#[cfg(test)]
#[path = "submissions_test.rs"]
mod tests;
