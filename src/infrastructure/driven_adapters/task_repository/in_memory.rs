//! In-Memory Task Repository Implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::TaskRepository;
use crate::domain::models::task::{CreateTaskData, Task, TaskId, UpdateTaskData};
use crate::shared::errors::RepositoryError;

/// In-memory implementation of TaskRepository, insertion ordered
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self) -> Result<Vec<Task>, RepositoryError> {
        Ok(self.tasks.read().await.clone())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        Ok(self.tasks.read().await.iter().find(|t| t.id() == id).cloned())
    }

    async fn create(&self, data: &CreateTaskData) -> Result<Task, RepositoryError> {
        let task = Task::from_create(TaskId::new(), data.clone());
        self.tasks.write().await.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: &TaskId, data: &UpdateTaskData) -> Result<Option<Task>, RepositoryError> {
        let mut tasks = self.tasks.write().await;
        let Some(slot) = tasks.iter_mut().find(|t| t.id() == id) else {
            return Ok(None);
        };

        let updated = slot.clone().with_updates(data.clone());
        *slot = updated.clone();
        Ok(Some(updated))
    }
}
