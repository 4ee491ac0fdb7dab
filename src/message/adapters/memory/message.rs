//! In-memory message repository for tests and database-less runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::message::{
    domain::{Message, MessageId, NewMessage},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};
use crate::task::domain::TaskId;

/// Thread-safe in-memory message repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    state: Arc<RwLock<InMemoryMessageState>>,
}

#[derive(Debug, Default)]
struct InMemoryMessageState {
    messages: Vec<Message>,
    last_id: i64,
}

impl InMemoryMessageRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> MessageRepositoryError {
    MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn insert(&self, message: NewMessage) -> MessageRepositoryResult<Message> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let stored = message.into_message(MessageId::from_persisted(state.last_id));
        state.messages.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_task(&self, task_id: TaskId) -> MessageRepositoryResult<Vec<Message>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut thread: Vec<Message> = state
            .messages
            .iter()
            .filter(|message| message.task_id() == task_id)
            .cloned()
            .collect();
        thread.sort_by_key(|message| (message.created_at(), message.id()));
        Ok(thread)
    }
}
