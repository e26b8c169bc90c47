//! Update User Use Case
//!
//! Applies a partial update in a single store write. Existence is not checked
//! beforehand; a missing row surfaces as a repository error.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{UpdateUserData, User, UserId};
use crate::shared::errors::UseCaseError;

/// Use case for updating a user
pub struct UpdateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    /// Create a new UpdateUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the row is missing or there's a database error.
    pub async fn execute(&self, raw_id: &str, data: UpdateUserData) -> Result<User, UseCaseError> {
        tracing::info!(user_id = %raw_id, "Updating user");

        let Ok(id) = UserId::try_from(raw_id) else {
            tracing::warn!(user_id = %raw_id, "User not found for update");
            return Err(UseCaseError::missing_row("User", raw_id));
        };

        let updated = self.user_repository.update(&id, &data).await?.ok_or_else(|| {
            tracing::warn!(user_id = %raw_id, "User not found for update");
            UseCaseError::missing_row("User", raw_id)
        })?;

        tracing::info!(user_id = %id, "User updated successfully");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::CreateUserData;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockUserRepository {
        stored: Mutex<Option<User>>,
        find_by_id_calls: Mutex<u32>,
    }

    impl MockUserRepository {
        fn new() -> Self {
            Self {
                stored: Mutex::new(None),
                find_by_id_calls: Mutex::new(0),
            }
        }

        fn with_stored(self, user: User) -> Self {
            *self.stored.lock().unwrap() = Some(user);
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
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn create(&self, data: &CreateUserData) -> Result<User, RepositoryError> {
            Ok(User::from_create(UserId::new(), data.clone()))
        }

        async fn update(&self, id: &UserId, data: &UpdateUserData) -> Result<Option<User>, RepositoryError> {
            let mut stored = self.stored.lock().unwrap();
            match stored.take() {
                Some(user) if user.id() == id => {
                    let updated = user.with_updates(data.clone());
                    *stored = Some(updated.clone());
                    Ok(Some(updated))
                }
                other => {
                    *stored = other;
                    Ok(None)
                }
            }
        }

        async fn delete(&self, _id: &UserId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn should_update_name_and_keep_age() {
        let user = User::restore(UserId::new(), "Alice".to_string(), 30);
        let repo = Arc::new(MockUserRepository::new().with_stored(user.clone()));

        let use_case = UpdateUserUseCase::new(repo.clone());
        let updated = use_case
            .execute(
                &user.id().to_string(),
                UpdateUserData {
                    name: Some("NewName".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name(), "NewName");
        assert_eq!(updated.age(), 30);
        // single write, no existence check
        assert_eq!(*repo.find_by_id_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn should_return_repository_not_found_when_row_missing() {
        let repo = Arc::new(MockUserRepository::new());

        let result = UpdateUserUseCase::new(repo)
            .execute(&UserId::new().to_string(), UpdateUserData::default())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_treat_malformed_id_as_missing_row() {
        let repo = Arc::new(MockUserRepository::new());

        let result = UpdateUserUseCase::new(repo).execute("nope", UpdateUserData::default()).await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Repository(RepositoryError::NotFound(_))
        ));
    }
}
