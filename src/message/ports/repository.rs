//! Repository port for message persistence.

use crate::message::domain::{Message, NewMessage};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message repository operations.
pub type MessageRepositoryResult<T> = Result<T, MessageRepositoryError>;

/// Message persistence contract. Messages are never updated or deleted.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Stores a message and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] when the write fails.
    async fn insert(&self, message: NewMessage) -> MessageRepositoryResult<Message>;

    /// Returns every message of a task ordered by `(created_at, id)`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] when the query fails.
    async fn list_by_task(&self, task_id: TaskId) -> MessageRepositoryResult<Vec<Message>>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
