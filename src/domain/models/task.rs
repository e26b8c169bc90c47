//! Task Domain Model

use uuid::Uuid;

/// Newtype wrapper for Task ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for TaskId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// Data required to create a new Task. New tasks always start incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskData {
    pub description: String,
}

/// Partial update for a Task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskData {
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Task domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    completed: bool,
}

impl Task {
    /// Restore a Task from persisted data
    #[must_use]
    pub fn restore(id: TaskId, description: String, completed: bool) -> Self {
        Self {
            id,
            description,
            completed,
        }
    }

    /// Build a freshly stored Task; `completed` defaults to false
    #[must_use]
    pub fn from_create(id: TaskId, data: CreateTaskData) -> Self {
        Self {
            id,
            description: data.description,
            completed: false,
        }
    }

    #[must_use]
    pub fn with_updates(self, data: UpdateTaskData) -> Self {
        Self {
            id: self.id,
            description: data.description.unwrap_or(self.description),
            completed: data.completed.unwrap_or(self.completed),
        }
    }

    #[must_use]
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_create_is_incomplete() {
        let task = Task::from_create(
            TaskId::new(),
            CreateTaskData {
                description: "buy milk".to_string(),
            },
        );

        assert_eq!(task.description(), "buy milk");
        assert!(!task.completed());
    }

    #[test]
    fn test_task_with_updates() {
        let task = Task::restore(TaskId::new(), "buy milk".to_string(), false);

        let updated = task.with_updates(UpdateTaskData {
            completed: Some(true),
            ..Default::default()
        });

        assert!(updated.completed());
        assert_eq!(updated.description(), "buy milk");
    }
}
