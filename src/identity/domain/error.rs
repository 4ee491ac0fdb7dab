//! Error types for identity domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing identity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username contains whitespace.
    #[error("username '{0}' must not contain whitespace")]
    InvalidUsername(String),

    /// The username exceeds the storage limit.
    #[error("username exceeds {max} character limit: {value}")]
    UsernameTooLong {
        /// Rejected value.
        value: String,
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The user identifier is not a positive integer.
    #[error("invalid user identifier {0}, expected a positive integer")]
    InvalidUserId(i64),
}

/// Error returned while parsing a role tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
