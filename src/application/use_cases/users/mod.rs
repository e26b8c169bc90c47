//! User Use Cases

mod create_user;
mod delete_user;
mod get_user_by_id;
mod list_users;
mod update_user;

pub use create_user::CreateUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_user_by_id::GetUserByIdUseCase;
pub use list_users::ListUsersUseCase;
pub use update_user::UpdateUserUseCase;
