//! Service layer for user registration, administration, and login.

use crate::access::can_manage_users;
use crate::error::ErrorKind;
use crate::identity::{
    domain::{
        IdentityDomainError, NewUser, ParseRoleError, Password, Role, User, UserId, UserSummary,
        Username,
    },
    ports::{CredentialError, CredentialHasher, UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    username: String,
    password: String,
    role: Option<String>,
}

impl RegisterUserRequest {
    /// Creates a request for an employee account.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: None,
        }
    }

    /// Requests a specific role instead of the employee default.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Partial update of a user record. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    username: Option<String>,
    role: Option<String>,
    password: Option<String>,
}

impl UpdateUserRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets a new role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets a new password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),
    /// The role tag is unknown.
    #[error(transparent)]
    InvalidRole(#[from] ParseRoleError),
    /// The actor may not administer users.
    #[error("access denied")]
    AccessDenied,
    /// The target user does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),
    /// The username is already registered.
    #[error("username already exists: {0}")]
    UsernameTaken(Username),
    /// Login failed. Unknown users and wrong passwords are not distinguished.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Hashing backend failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(UserRepositoryError),
}

impl From<UserRepositoryError> for UserDirectoryError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateUsername(username) => Self::UsernameTaken(username),
            UserRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ UserRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

impl UserDirectoryError {
    /// Classifies the error for transport mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::InvalidRole(_) | Self::UsernameTaken(_) => ErrorKind::Validation,
            Self::AccessDenied => ErrorKind::AccessDenied,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidCredentials => ErrorKind::Unauthenticated,
            Self::Credential(_) | Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for user directory service operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory orchestration service.
pub struct UserDirectoryService<R, H, C>
where
    R: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    clock: Arc<C>,
}

impl<R, H, C> Clone for UserDirectoryService<R, H, C>
where
    R: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: Arc::clone(&self.hasher),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, H, C> UserDirectoryService<R, H, C>
where
    R: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, hasher: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            repository,
            hasher,
            clock,
        }
    }

    /// Registers a new account on behalf of an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::AccessDenied`] unless the actor is an
    /// admin or ceo, a validation error for a malformed username, password,
    /// or role, and [`UserDirectoryError::UsernameTaken`] for duplicates.
    pub async fn register(
        &self,
        actor: &User,
        request: RegisterUserRequest,
    ) -> UserDirectoryResult<User> {
        if !can_manage_users(actor.principal()) {
            warn!(actor = %actor.id(), "user registration denied");
            return Err(UserDirectoryError::AccessDenied);
        }

        let RegisterUserRequest {
            username,
            password,
            role,
        } = request;
        let requested_role = role
            .as_deref()
            .map(Role::try_from)
            .transpose()?
            .unwrap_or(Role::Employee);
        let user = self
            .create(
                Username::new(username)?,
                &Password::new(password)?,
                requested_role,
            )
            .await?;

        info!(
            actor = %actor.id(),
            user = %user.id(),
            username = %user.username(),
            role = %user.role(),
            "user registered"
        );
        Ok(user)
    }

    /// Applies a partial update to another user's record.
    ///
    /// Existence is checked before permission, so a missing target reports
    /// [`UserDirectoryError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`],
    /// [`UserDirectoryError::AccessDenied`], validation errors, or
    /// [`UserDirectoryError::UsernameTaken`] when a rename collides.
    pub async fn update_user(
        &self,
        actor: &User,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> UserDirectoryResult<User> {
        let mut user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or(UserDirectoryError::NotFound(user_id))?;
        if !can_manage_users(actor.principal()) {
            warn!(actor = %actor.id(), target = %user_id, "user update denied");
            return Err(UserDirectoryError::AccessDenied);
        }

        let UpdateUserRequest {
            username,
            role,
            password,
        } = request;
        let new_username = username.map(Username::new).transpose()?;
        let new_role = role.as_deref().map(Role::try_from).transpose()?;
        let new_password = password.map(Password::new).transpose()?;
        let new_hash = new_password
            .map(|plain| self.hasher.hash(&plain))
            .transpose()?;

        if let Some(value) = new_username {
            user.rename(value);
        }
        if let Some(value) = new_role {
            user.assign_role(value);
        }
        if let Some(value) = new_hash {
            user.replace_password_hash(value);
        }
        self.repository.update(&user).await?;

        info!(actor = %actor.id(), user = %user.id(), "user updated");
        Ok(user)
    }

    /// Verifies a username and password pair.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::InvalidCredentials`] for any mismatch.
    pub async fn authenticate(&self, username: &str, password: &str) -> UserDirectoryResult<User> {
        let (Ok(name), Ok(plain)) = (Username::new(username), Password::new(password)) else {
            return Err(UserDirectoryError::InvalidCredentials);
        };

        let Some(user) = self.repository.find_by_username(&name).await? else {
            warn!(username = %name, "login failed: unknown user");
            return Err(UserDirectoryError::InvalidCredentials);
        };
        if !self.hasher.verify(&plain, user.password_hash()) {
            warn!(username = %name, "login failed: password mismatch");
            return Err(UserDirectoryError::InvalidCredentials);
        }

        debug!(user = %user.id(), "login succeeded");
        Ok(user)
    }

    /// Lists all users ordered by username, without credential material.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn list(&self, actor: &User) -> UserDirectoryResult<Vec<UserSummary>> {
        let users = self.repository.list().await?;
        debug!(actor = %actor.id(), count = users.len(), "listed users");
        Ok(users.iter().map(User::summary).collect())
    }

    /// Finds a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds a user by username. Malformed usernames simply match nobody.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn find_by_username(&self, username: &str) -> UserDirectoryResult<Option<User>> {
        let Ok(name) = Username::new(username) else {
            return Ok(None);
        };
        Ok(self.repository.find_by_username(&name).await?)
    }

    /// Returns the named user, creating it when absent.
    ///
    /// Used only while seeding at process start. Existing users are returned
    /// untouched, including their role and credentials.
    ///
    /// # Errors
    ///
    /// Returns validation errors for malformed input or a repository error.
    pub async fn ensure_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> UserDirectoryResult<User> {
        let name = Username::new(username)?;
        if let Some(existing) = self.repository.find_by_username(&name).await? {
            return Ok(existing);
        }
        let user = self.create(name, &Password::new(password)?, role).await?;
        info!(user = %user.id(), username = %user.username(), role = %user.role(), "user seeded");
        Ok(user)
    }

    async fn create(
        &self,
        username: Username,
        password: &Password,
        role: Role,
    ) -> UserDirectoryResult<User> {
        let hash = self.hasher.hash(password)?;
        let new_user = NewUser::new(username, role, hash, &*self.clock);
        Ok(self.repository.insert(new_user).await?)
    }
}
