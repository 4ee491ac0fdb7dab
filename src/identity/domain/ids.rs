//! Identifier and validated scalar types for the identity domain.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum username length, matching the `VARCHAR(64)` column.
const MAX_USERNAME_LENGTH: usize = 64;

/// Store-assigned identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::InvalidUserId`] when the value is zero
    /// or negative.
    pub const fn new(value: i64) -> Result<Self, IdentityDomainError> {
        if value <= 0 {
            return Err(IdentityDomainError::InvalidUserId(value));
        }
        Ok(Self(value))
    }

    /// Wraps an identifier read back from storage.
    #[must_use]
    pub const fn from_persisted(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique login name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    ///
    /// The input is trimmed. Case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyUsername`] when the value is empty
    /// after trimming, [`IdentityDomainError::InvalidUsername`] when it
    /// contains inner whitespace, or [`IdentityDomainError::UsernameTooLong`]
    /// when it exceeds 64 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(IdentityDomainError::EmptyUsername);
        }
        if normalized.chars().count() > MAX_USERNAME_LENGTH {
            return Err(IdentityDomainError::UsernameTooLong {
                value: raw,
                max: MAX_USERNAME_LENGTH,
            });
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(IdentityDomainError::InvalidUsername(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
