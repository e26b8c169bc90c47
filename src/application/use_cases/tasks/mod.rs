//! Task Use Cases
//!
//! Tasks have no delete operation.

mod create_task;
mod get_task_by_id;
mod list_tasks;
mod update_task;

pub use create_task::CreateTaskUseCase;
pub use get_task_by_id::GetTaskByIdUseCase;
pub use list_tasks::ListTasksUseCase;
pub use update_task::UpdateTaskUseCase;
