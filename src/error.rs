//! Cross-cutting error classification.
//!
//! Every service error maps onto one [`ErrorKind`]; transport adapters use
//! the kind to pick a response code without matching on individual
//! variants.

use serde::Serialize;

/// Coarse classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A referenced entity does not exist.
    NotFound,
    /// The access policy rejected the action.
    AccessDenied,
    /// A supplied status or assignee reference does not resolve.
    InvalidReference,
    /// The input is malformed.
    Validation,
    /// The caller could not be identified.
    Unauthenticated,
    /// Storage or infrastructure failure.
    Internal,
}
