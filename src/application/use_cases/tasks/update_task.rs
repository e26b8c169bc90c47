//! Update Task Use Case
//!
//! Serves both PUT and PATCH; only fields present in the payload change.

use std::sync::Arc;

use crate::domain::gateways::TaskRepository;
use crate::domain::models::task::{Task, TaskId, UpdateTaskData};
use crate::shared::errors::UseCaseError;

/// Use case for updating a task
pub struct UpdateTaskUseCase {
    task_repository: Arc<dyn TaskRepository>,
}

impl UpdateTaskUseCase {
    #[must_use]
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the row is missing or there's a database error.
    pub async fn execute(&self, raw_id: &str, data: UpdateTaskData) -> Result<Task, UseCaseError> {
        tracing::info!(task_id = %raw_id, completed = ?data.completed, "Updating task");

        let missing = || {
            tracing::warn!(task_id = %raw_id, "Task not found for update");
            UseCaseError::missing_row("Task", raw_id)
        };

        let Ok(id) = TaskId::try_from(raw_id) else {
            return Err(missing());
        };

        let updated = self.task_repository.update(&id, &data).await?.ok_or_else(missing)?;

        tracing::info!(task_id = %id, "Task updated successfully");
        Ok(updated)
    }
}
