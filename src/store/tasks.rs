use chrono::Utc;
use sqlx::SqlitePool;

use crate::{error::AppError, models::Task};

/// Persistent task records.
///
/// Every operation is a single statement, so SQLite's per-statement locking is all the
/// serialization concurrent requests need.
#[derive(Debug, Clone)]
pub struct TaskStore {
    pool: SqlitePool,
}

impl TaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new, not yet completed task stamped with the current time.
    pub async fn create(&self, description: &str) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (description, completed, created_at)
             VALUES (?, ?, ?)
             RETURNING id, description, completed, created_at",
        )
        .bind(description)
        .bind(false)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn get(&self, id: i64) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(
            "SELECT id, description, completed, created_at FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| task_not_found(id))
    }

    /// Replaces the description and completion flag. `id` and `created_at` never change.
    pub async fn update(&self, id: i64, description: &str, completed: bool) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET description = ?, completed = ?
             WHERE id = ?
             RETURNING id, description, completed, created_at",
        )
        .bind(description)
        .bind(completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| task_not_found(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(id));
        }
        Ok(())
    }

    /// Returns every task in insertion (id) order.
    pub async fn list(&self) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, description, completed, created_at FROM tasks ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }
}

fn task_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Task {} not found", id))
}
