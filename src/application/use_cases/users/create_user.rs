//! Create User Use Case
//!
//! Persists a new user. The request body has already been validated by the
//! REST layer; the store assigns the ID.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{CreateUserData, User};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new user
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    /// Create a new CreateUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateUserData) -> Result<User, UseCaseError> {
        tracing::info!(name = %data.name, age = data.age, "Creating new user");

        let created = self.user_repository.create(&data).await?;

        tracing::info!(user_id = %created.id(), "User created successfully");
        Ok(created)
    }
}
