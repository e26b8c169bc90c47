//! Domain Models
//!
//! Pure domain entities and value objects.

pub mod task;
pub mod user;

pub use task::{CreateTaskData, Task, TaskId, UpdateTaskData};
pub use user::{CreateUserData, UpdateUserData, User, UserId};
