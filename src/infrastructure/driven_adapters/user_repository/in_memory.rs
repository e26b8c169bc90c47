//! In-Memory User Repository Implementation
//!
//! Keeps users in insertion order behind a `tokio::sync::RwLock`. Used when
//! `database.driver = "memory"` and by the end-to-end tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{CreateUserData, UpdateUserData, User, UserId};
use crate::shared::errors::RepositoryError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().await.iter().find(|u| u.id() == id).cloned())
    }

    async fn create(&self, data: &CreateUserData) -> Result<User, RepositoryError> {
        let user = User::from_create(UserId::new(), data.clone());
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &UserId, data: &UpdateUserData) -> Result<Option<User>, RepositoryError> {
        let mut users = self.users.write().await;
        let Some(slot) = users.iter_mut().find(|u| u.id() == id) else {
            return Ok(None);
        };

        let updated = slot.clone().with_updates(data.clone());
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id() != id);
        Ok(users.len() < before)
    }
}
