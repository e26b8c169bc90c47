//! List Tasks Use Case

use std::sync::Arc;

use crate::domain::gateways::TaskRepository;
use crate::domain::models::task::Task;
use crate::shared::errors::UseCaseError;

pub struct ListTasksUseCase {
    task_repository: Arc<dyn TaskRepository>,
}

impl ListTasksUseCase {
    #[must_use]
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Task>, UseCaseError> {
        tracing::debug!("Listing tasks");

        let tasks = self.task_repository.find_all().await?;

        tracing::debug!(count = tasks.len(), "Found tasks");
        Ok(tasks)
    }
}
