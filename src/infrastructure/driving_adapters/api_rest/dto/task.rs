//! Task DTOs
//!
//! Task payloads are taken as-is; only their JSON types are enforced.

use serde::{Deserialize, Serialize};

use crate::domain::models::task::{CreateTaskData, Task, UpdateTaskData};

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskDto {
    pub description: String,
}

impl From<CreateTaskDto> for CreateTaskData {
    fn from(dto: CreateTaskDto) -> Self {
        Self {
            description: dto.description,
        }
    }
}

/// DTO for updating a task (PUT and PATCH)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskDto {
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl From<UpdateTaskDto> for UpdateTaskData {
    fn from(dto: UpdateTaskDto) -> Self {
        Self {
            description: dto.description,
            completed: dto.completed,
        }
    }
}

/// Task response DTO
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponseDto {
    pub id: String,
    pub description: String,
    pub completed: bool,
}

impl From<Task> for TaskResponseDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().to_string(),
            description: task.description().to_string(),
            completed: task.completed(),
        }
    }
}
