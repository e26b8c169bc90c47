//! PostgreSQL Task Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::TaskRepository;
use crate::domain::models::task::{CreateTaskData, Task, TaskId, UpdateTaskData};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    description: String,
    completed: bool,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task::restore(TaskId::from_uuid(row.id), row.description, row.completed)
    }
}

/// PostgreSQL implementation of TaskRepository
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_all(&self) -> Result<Vec<Task>, RepositoryError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, description, completed
            FROM tasks
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, description, completed
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Task::from))
    }

    async fn create(&self, data: &CreateTaskData) -> Result<Task, RepositoryError> {
        // completed falls back to the column default
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (description)
            VALUES ($1)
            RETURNING id, description, completed
            "#,
        )
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(Task::from(row))
    }

    async fn update(&self, id: &TaskId, data: &UpdateTaskData) -> Result<Option<Task>, RepositoryError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET description = COALESCE($2, description),
                completed = COALESCE($3, completed)
            WHERE id = $1
            RETURNING id, description, completed
            "#,
        )
        .bind(id.as_uuid())
        .bind(data.description.as_deref())
        .bind(data.completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Task::from))
    }
}
