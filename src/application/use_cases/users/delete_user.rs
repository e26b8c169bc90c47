//! Delete User Use Case
//!
//! Hard deletes a user in a single store call.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a user
pub struct DeleteUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    /// Create a new DeleteUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the row is missing or there's a database error.
    pub async fn execute(&self, raw_id: &str) -> Result<(), UseCaseError> {
        tracing::info!(user_id = %raw_id, "Deleting user");

        let deleted = match UserId::try_from(raw_id) {
            Ok(id) => self.user_repository.delete(&id).await?,
            Err(_) => false,
        };

        if !deleted {
            tracing::warn!(user_id = %raw_id, "User not found for deletion");
            return Err(UseCaseError::missing_row("User", raw_id));
        }

        tracing::info!(user_id = %raw_id, "User deleted successfully");
        Ok(())
    }
}
