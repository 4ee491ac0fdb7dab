//! In-memory user repository for tests and database-less runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{NewUser, User, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: BTreeMap<UserId, User>,
    last_id: i64,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn username_taken_by_other(state: &InMemoryUserState, username: &Username, id: UserId) -> bool {
    state
        .users
        .values()
        .any(|user| user.username() == username && user.id() != id)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state
            .users
            .values()
            .any(|existing| existing.username() == user.username())
        {
            return Err(UserRepositoryError::DuplicateUsername(
                user.username().clone(),
            ));
        }

        state.last_id += 1;
        let stored = user.into_user(UserId::from_persisted(state.last_id));
        state.users.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::NotFound(user.id()));
        }
        if username_taken_by_other(&state, user.username(), user.id()) {
            return Err(UserRepositoryError::DuplicateUsername(
                user.username().clone(),
            ));
        }
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .users
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|left, right| left.username().cmp(right.username()));
        Ok(users)
    }
}
