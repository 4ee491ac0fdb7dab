//! Credential value types.

use super::IdentityDomainError;
use std::fmt;

/// Plaintext password supplied at a trust boundary.
///
/// The value is never logged: `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyPassword`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(IdentityDomainError::EmptyPassword);
        }
        Ok(Self(raw))
    }

    /// Exposes the plaintext for hashing or verification.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Salted one-way password hash in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps an encoded hash produced by a credential hasher or read from
    /// storage.
    #[must_use]
    pub fn from_encoded(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the encoded hash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(***)")
    }
}
