//! Credential hashing port.

use crate::identity::domain::{Password, PasswordHash};
use thiserror::Error;

/// One-way password hashing contract.
///
/// Implementations must salt every hash and use a deliberately slow
/// algorithm. Verification of a malformed stored hash reports `false`
/// rather than an error so that login failures stay indistinguishable.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hashes a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the hashing backend fails.
    fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError>;

    /// Checks a plaintext password against a stored hash.
    fn verify(&self, password: &Password, hash: &PasswordHash) -> bool;
}

/// Failure raised by a credential hashing backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("credential hashing failed: {0}")]
pub struct CredentialError(pub String);
