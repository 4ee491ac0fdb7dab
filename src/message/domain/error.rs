//! Error types for message domain validation.

use thiserror::Error;

/// Errors returned while constructing message values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageDomainError {
    /// The message body is empty or whitespace-only.
    #[error("message content must not be empty")]
    EmptyContent,
}
