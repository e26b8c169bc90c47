//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod task;
pub mod user;

pub use task::{CreateTaskDto, TaskResponseDto, UpdateTaskDto};
pub use user::{CreateUserDto, UpdateUserDto, UserResponseDto};
