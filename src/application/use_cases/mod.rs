//! Use Cases
//!
//! Each use case is a single-purpose struct with an execute() method that
//! performs exactly one repository call.

pub mod tasks;
pub mod users;

pub use tasks::{CreateTaskUseCase, GetTaskByIdUseCase, ListTasksUseCase, UpdateTaskUseCase};
pub use users::{
    CreateUserUseCase, DeleteUserUseCase, GetUserByIdUseCase, ListUsersUseCase, UpdateUserUseCase,
};
