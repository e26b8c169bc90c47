//! Get User By ID Use Case
//!
//! Retrieves a single user by its ID.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a user by ID
pub struct GetUserByIdUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserByIdUseCase {
    /// Create a new GetUserByIdUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// `raw_id` is the path segment as received; an ID that is not a UUID can
    /// never have been assigned by the store and is reported as not found.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the user doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, raw_id: &str) -> Result<User, UseCaseError> {
        tracing::debug!(user_id = %raw_id, "Getting user by ID");

        let not_found = || {
            tracing::warn!(user_id = %raw_id, "User not found");
            UseCaseError::NotFound {
                resource: "User",
                id: raw_id.to_string(),
            }
        };

        let Ok(id) = UserId::try_from(raw_id) else {
            return Err(not_found());
        };

        self.user_repository.find_by_id(&id).await?.ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::{CreateUserData, UpdateUserData};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockUserRepository {
        find_by_id_result: Mutex<Option<Result<Option<User>, RepositoryError>>>,
        find_by_id_calls: Mutex<u32>,
    }

    impl MockUserRepository {
        fn new() -> Self {
            Self {
                find_by_id_result: Mutex::new(None),
                find_by_id_calls: Mutex::new(0),
            }
        }

        fn with_find_by_id(self, result: Result<Option<User>, RepositoryError>) -> Self {
            *self.find_by_id_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, RepositoryError> {
            *self.find_by_id_calls.lock().unwrap() += 1;
            self.find_by_id_result.lock().unwrap().take().unwrap_or(Ok(None))
        }

        async fn create(&self, data: &CreateUserData) -> Result<User, RepositoryError> {
            Ok(User::from_create(UserId::new(), data.clone()))
        }

        async fn update(&self, _id: &UserId, _data: &UpdateUserData) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn delete(&self, _id: &UserId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn should_return_user_when_found() {
        let user = User::restore(UserId::new(), "Alice".to_string(), 30);
        let repo = Arc::new(MockUserRepository::new().with_find_by_id(Ok(Some(user.clone()))));

        let result = GetUserByIdUseCase::new(repo).execute(&user.id().to_string()).await;

        assert_eq!(result.unwrap(), user);
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_does_not_exist() {
        let repo = Arc::new(MockUserRepository::new().with_find_by_id(Ok(None)));
        let id = UserId::new().to_string();

        let result = GetUserByIdUseCase::new(repo).execute(&id).await;

        let error = result.unwrap_err();
        assert_eq!(error.to_string(), format!("User with id {id} not found."));
    }

    #[tokio::test]
    async fn should_return_not_found_for_malformed_id_without_querying() {
        let repo = Arc::new(MockUserRepository::new());

        let result = GetUserByIdUseCase::new(repo.clone()).execute("42").await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
        assert_eq!(*repo.find_by_id_calls.lock().unwrap(), 0);
    }
}
