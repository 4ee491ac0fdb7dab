//! Error types for status catalog validation.

use thiserror::Error;

/// Errors returned while constructing status values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusDomainError {
    /// The status name is empty after trimming.
    #[error("status name must not be empty")]
    EmptyStatusName,
}
