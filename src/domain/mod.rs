//! Domain Layer
//!
//! Contains the domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{TaskRepository, UserRepository};
pub use models::{CreateTaskData, CreateUserData, Task, TaskId, UpdateTaskData, UpdateUserData, User, UserId};
