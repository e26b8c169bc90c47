//! Create Task Use Case

use std::sync::Arc;

use crate::domain::gateways::TaskRepository;
use crate::domain::models::task::{CreateTaskData, Task};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new task. The task body is not validated.
pub struct CreateTaskUseCase {
    task_repository: Arc<dyn TaskRepository>,
}

impl CreateTaskUseCase {
    #[must_use]
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateTaskData) -> Result<Task, UseCaseError> {
        tracing::info!(description = %data.description, "Creating new task");

        let created = self.task_repository.create(&data).await?;

        tracing::info!(task_id = %created.id(), "Task created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::task::{TaskId, UpdateTaskData};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockTaskRepository {
        create_result: Mutex<Option<Result<Task, RepositoryError>>>,
    }

    impl MockTaskRepository {
        fn new() -> Self {
            Self {
                create_result: Mutex::new(None),
            }
        }

        fn with_create(self, result: Result<Task, RepositoryError>) -> Self {
            *self.create_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl TaskRepository for MockTaskRepository {
        async fn find_all(&self) -> Result<Vec<Task>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: &TaskId) -> Result<Option<Task>, RepositoryError> {
            Ok(None)
        }

        async fn create(&self, data: &CreateTaskData) -> Result<Task, RepositoryError> {
            self.create_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Task::from_create(TaskId::new(), data.clone())))
        }

        async fn update(&self, _id: &TaskId, _data: &UpdateTaskData) -> Result<Option<Task>, RepositoryError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn should_create_incomplete_task() {
        let repo = Arc::new(MockTaskRepository::new());

        let task = CreateTaskUseCase::new(repo)
            .execute(CreateTaskData {
                description: "buy milk".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(task.description(), "buy milk");
        assert!(!task.completed());
    }

    #[tokio::test]
    async fn should_propagate_store_error() {
        let repo = Arc::new(
            MockTaskRepository::new().with_create(Err(RepositoryError::Database(sqlx::Error::PoolClosed))),
        );

        let result = CreateTaskUseCase::new(repo)
            .execute(CreateTaskData {
                description: "buy milk".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
