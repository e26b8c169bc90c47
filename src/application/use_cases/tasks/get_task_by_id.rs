//! Get Task By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::TaskRepository;
use crate::domain::models::task::{Task, TaskId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a task by ID
pub struct GetTaskByIdUseCase {
    task_repository: Arc<dyn TaskRepository>,
}

impl GetTaskByIdUseCase {
    #[must_use]
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the task doesn't exist or the ID is malformed.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, raw_id: &str) -> Result<Task, UseCaseError> {
        tracing::debug!(task_id = %raw_id, "Getting task by ID");

        let not_found = || {
            tracing::warn!(task_id = %raw_id, "Task not found");
            UseCaseError::NotFound {
                resource: "Task",
                id: raw_id.to_string(),
            }
        };

        let Ok(id) = TaskId::try_from(raw_id) else {
            return Err(not_found());
        };

        self.task_repository.find_by_id(&id).await?.ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::task::{CreateTaskData, UpdateTaskData};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;

    struct MockTaskRepository {
        stored: Option<Task>,
    }

    #[async_trait]
    impl TaskRepository for MockTaskRepository {
        async fn find_all(&self) -> Result<Vec<Task>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
            Ok(self.stored.clone().filter(|t| t.id() == id))
        }

        async fn create(&self, data: &CreateTaskData) -> Result<Task, RepositoryError> {
            Ok(Task::from_create(TaskId::new(), data.clone()))
        }

        async fn update(&self, _id: &TaskId, _data: &UpdateTaskData) -> Result<Option<Task>, RepositoryError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn should_return_task_when_found() {
        let task = Task::restore(TaskId::new(), "buy milk".to_string(), false);
        let repo = Arc::new(MockTaskRepository {
            stored: Some(task.clone()),
        });

        let result = GetTaskByIdUseCase::new(repo).execute(&task.id().to_string()).await;

        assert_eq!(result.unwrap(), task);
    }

    #[tokio::test]
    async fn should_return_not_found_when_task_does_not_exist() {
        let repo = Arc::new(MockTaskRepository { stored: None });
        let id = TaskId::new().to_string();

        let result = GetTaskByIdUseCase::new(repo).execute(&id).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            format!("Task with id {id} not found.")
        );
    }
}
