//! User Domain Model
//!
//! Represents a person registered through the API.

use uuid::Uuid;

/// Newtype wrapper for User ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new random UserId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a UserId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for UserId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// Data required to create a new User
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserData {
    pub name: String,
    pub age: i32,
}

/// Data for updating an existing User; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    age: i32,
}

impl User {
    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(id: UserId, name: String, age: i32) -> Self {
        Self { id, name, age }
    }

    /// Build a freshly stored User from creation data and the id the store assigned
    #[must_use]
    pub fn from_create(id: UserId, data: CreateUserData) -> Self {
        Self {
            id,
            name: data.name,
            age: data.age,
        }
    }

    /// Apply updates to the user, returning a new instance
    #[must_use]
    pub fn with_updates(self, data: UpdateUserData) -> Self {
        Self {
            id: self.id,
            name: data.name.unwrap_or(self.name),
            age: data.age.unwrap_or(self.age),
        }
    }

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> i32 {
        self.age
    }
}
