use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Request body for creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// What needs doing.
    /// Must be between 1 and 1000 characters.
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

/// Request body for updating a task.
///
/// Updates replace both mutable fields; an omitted `completed` means `false`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Represents a task as stored in the database and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Store-assigned identifier. Never reused, even after deletion.
    pub id: i64,
    pub description: String,
    pub completed: bool,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
}
