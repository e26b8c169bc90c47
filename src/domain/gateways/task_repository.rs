//! Task Repository Gateway

use async_trait::async_trait;

use crate::domain::models::task::{CreateTaskData, Task, TaskId, UpdateTaskData};
use crate::shared::errors::RepositoryError;

/// Repository trait for Task persistence operations.
///
/// Tasks are never deleted, so there is no delete operation.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Task>, RepositoryError>;

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError>;

    /// Create a new task with `completed = false`
    async fn create(&self, data: &CreateTaskData) -> Result<Task, RepositoryError>;

    /// Apply a partial update, returning `None` when no row has this ID
    async fn update(&self, id: &TaskId, data: &UpdateTaskData) -> Result<Option<Task>, RepositoryError>;
}
