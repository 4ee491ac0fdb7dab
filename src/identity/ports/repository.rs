//! Repository port for user persistence and lookup.

use crate::identity::domain::{NewUser, User, UserId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUsername`] when the username is
    /// already taken.
    async fn insert(&self, user: NewUser) -> UserRepositoryResult<User>;

    /// Persists changes to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not exist
    /// or [`UserRepositoryError::DuplicateUsername`] when a rename collides.
    async fn update(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Finds a user by exact username.
    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>>;

    /// Returns every user ordered by username.
    async fn list(&self) -> UserRepositoryResult<Vec<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// The username is already registered.
    #[error("username already exists: {0}")]
    DuplicateUsername(Username),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
