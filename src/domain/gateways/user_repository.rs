//! User Repository Gateway
//!
//! Abstract trait defining the contract for user persistence operations.

use async_trait::async_trait;

use crate::domain::models::user::{CreateUserData, UpdateUserData, User, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find every stored user
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Find a user by its ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Create a new user; the store assigns its ID
    async fn create(&self, data: &CreateUserData) -> Result<User, RepositoryError>;

    /// Apply a partial update, returning `None` when no row has this ID
    async fn update(&self, id: &UserId, data: &UpdateUserData) -> Result<Option<User>, RepositoryError>;

    /// Hard delete a user, returning whether a row was removed
    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError>;
}
