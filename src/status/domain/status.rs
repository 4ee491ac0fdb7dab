//! Status catalog entries.

use super::StatusDomainError;
use serde::Serialize;
use std::fmt;

/// Default workflow, in board order.
pub const DEFAULT_WORKFLOW: [(&str, i32); 4] = [
    ("сделать", 1),
    ("в работе", 2),
    ("на проверке", 3),
    ("готово", 4),
];

/// Store-assigned identifier for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StatusId(i64);

impl StatusId {
    /// Wraps an identifier read back from storage or supplied by a client.
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

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique display name of a workflow status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StatusName(String);

impl StatusName {
    /// Creates a validated status name. Case is significant.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::EmptyStatusName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, StatusDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(StatusDomainError::EmptyStatusName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatus {
    /// Status name.
    pub name: StatusName,
    /// Position on the board.
    pub order_index: i32,
}

/// Stored catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    id: StatusId,
    name: StatusName,
    order_index: i32,
}

impl Status {
    /// Creates a stored entry.
    #[must_use]
    pub const fn new(id: StatusId, name: StatusName, order_index: i32) -> Self {
        Self {
            id,
            name,
            order_index,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub const fn name(&self) -> &StatusName {
        &self.name
    }

    /// Returns the board position.
    #[must_use]
    pub const fn order_index(&self) -> i32 {
        self.order_index
    }
}
