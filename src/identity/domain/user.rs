//! User aggregate and its listing view.

use super::{PasswordHash, Role, UserId, Username};
use crate::access::Principal;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// User record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    role: Role,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

impl NewUser {
    /// Creates an unsaved user stamped with the current clock time.
    #[must_use]
    pub fn new(
        username: Username,
        role: Role,
        password_hash: PasswordHash,
        clock: &impl Clock,
    ) -> Self {
        Self {
            username,
            role,
            password_hash,
            created_at: clock.utc(),
        }
    }

    /// Returns the requested username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the requested role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the credential hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches a store-assigned identifier, producing a persisted user.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            role: self.role,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: Username,
    /// Persisted role.
    pub role: Role,
    /// Persisted credential hash.
    pub password_hash: PasswordHash,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    role: Role,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

impl User {
    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            role: data.role,
            password_hash: data.password_hash,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the stored credential hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the identity used by access policies.
    #[must_use]
    pub const fn principal(&self) -> Principal {
        Principal::new(self.id, self.role)
    }

    /// Changes the username.
    pub fn rename(&mut self, username: Username) {
        self.username = username;
    }

    /// Changes the role.
    pub const fn assign_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Replaces the credential hash.
    pub fn replace_password_hash(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }

    /// Returns the credential-free listing view of this user.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Public view of a user. Carries no credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Login name.
    pub username: Username,
    /// Role tag.
    pub role: Role,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
