//! Chat message entity.

use super::MessageDomainError;
use crate::identity::domain::UserId;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::fmt;

/// Store-assigned identifier for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MessageId(i64);

impl MessageId {
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

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message body. Stored as written; only blank bodies are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageContent(String);

impl MessageContent {
    /// Validates a message body.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::EmptyContent`] for blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, MessageDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(MessageDomainError::EmptyContent);
        }
        Ok(Self(raw))
    }

    /// Returns the body as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Message that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    task_id: TaskId,
    author_id: UserId,
    content: MessageContent,
    created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Creates an unsaved message stamped with the current clock time.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        author_id: UserId,
        content: MessageContent,
        clock: &impl Clock,
    ) -> Self {
        Self {
            task_id,
            author_id,
            content,
            created_at: clock.utc(),
        }
    }

    /// Returns the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the body.
    #[must_use]
    pub const fn content(&self) -> &MessageContent {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches a store-assigned identifier.
    #[must_use]
    pub fn into_message(self, id: MessageId) -> Message {
        Message {
            id,
            task_id: self.task_id,
            author_id: self.author_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Parameter object for reconstructing a persisted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMessageData {
    /// Persisted identifier.
    pub id: MessageId,
    /// Owning task.
    pub task_id: TaskId,
    /// Author.
    pub author_id: UserId,
    /// Body.
    pub content: MessageContent,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Stored chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    task_id: TaskId,
    author_id: UserId,
    content: MessageContent,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Reconstructs a message from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedMessageData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            author_id: data.author_id,
            content: data.content,
            created_at: data.created_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the body.
    #[must_use]
    pub const fn content(&self) -> &MessageContent {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
