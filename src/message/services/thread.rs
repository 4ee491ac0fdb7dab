//! Visibility-gated reading and posting of task chat messages.

use crate::error::ErrorKind;
use crate::identity::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use crate::message::{
    domain::{Message, MessageContent, MessageDomainError, MessageId, NewMessage},
    ports::{MessageRepository, MessageRepositoryError},
};
use crate::task::{
    domain::TaskId,
    ports::{TaskRepository, TaskRepositoryError},
    services::{TaskAccessError, TaskAccessGate},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// One entry of a thread with its author resolved to a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    /// Message identifier.
    pub id: MessageId,
    /// Author username, empty when the author record is gone.
    pub user: String,
    /// Message body.
    pub content: MessageContent,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Service-level errors for message thread operations.
#[derive(Debug, Error)]
pub enum MessageThreadError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The actor cannot see the task.
    #[error("access denied")]
    AccessDenied,
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] MessageDomainError),
    /// The task's assignee is missing from the directory.
    #[error("task {task} references missing assignee {assignee}")]
    DanglingAssignee {
        /// Task holding the reference.
        task: TaskId,
        /// Missing user.
        assignee: UserId,
    },
    /// Message storage failed.
    #[error(transparent)]
    Messages(#[from] MessageRepositoryError),
    /// Task storage failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

impl From<TaskAccessError> for MessageThreadError {
    fn from(err: TaskAccessError) -> Self {
        match err {
            TaskAccessError::NotFound(id) => Self::NotFound(id),
            TaskAccessError::AccessDenied => Self::AccessDenied,
            TaskAccessError::DanglingAssignee { task, assignee } => {
                Self::DanglingAssignee { task, assignee }
            }
            TaskAccessError::Tasks(inner) => Self::Tasks(inner),
            TaskAccessError::Users(inner) => Self::Users(inner),
        }
    }
}

impl MessageThreadError {
    /// Classifies the error for transport mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AccessDenied => ErrorKind::AccessDenied,
            Self::Domain(_) => ErrorKind::Validation,
            Self::DanglingAssignee { .. } | Self::Messages(_) | Self::Tasks(_) | Self::Users(_) => {
                ErrorKind::Internal
            }
        }
    }
}

/// Result type for message thread operations.
pub type MessageThreadResult<T> = Result<T, MessageThreadError>;

/// Message thread orchestration service.
pub struct MessageThreadService<M, T, U, C>
where
    M: MessageRepository + ?Sized,
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    messages: Arc<M>,
    gate: TaskAccessGate<T, U>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<M, T, U, C> Clone for MessageThreadService<M, T, U, C>
where
    M: MessageRepository + ?Sized,
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            messages: Arc::clone(&self.messages),
            gate: self.gate.clone(),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<M, T, U, C> MessageThreadService<M, T, U, C>
where
    M: MessageRepository + ?Sized,
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a message thread service.
    #[must_use]
    pub fn new(messages: Arc<M>, tasks: Arc<T>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            messages,
            gate: TaskAccessGate::new(tasks, Arc::clone(&users)),
            users,
            clock,
        }
    }

    /// Lists a task's thread, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`MessageThreadError::NotFound`] before
    /// [`MessageThreadError::AccessDenied`].
    pub async fn list(
        &self,
        actor: &User,
        task_id: TaskId,
    ) -> MessageThreadResult<Vec<MessageView>> {
        self.gate.load_visible(actor.principal(), task_id).await?;

        let thread = self.messages.list_by_task(task_id).await?;
        let authors: HashMap<UserId, String> = self
            .users
            .list()
            .await?
            .into_iter()
            .map(|user| (user.id(), user.username().as_str().to_owned()))
            .collect();

        debug!(actor = %actor.id(), task = %task_id, count = thread.len(), "thread listed");
        Ok(thread
            .iter()
            .map(|message| to_view(message, &authors))
            .collect())
    }

    /// Posts a message authored by `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageThreadError::NotFound`],
    /// [`MessageThreadError::AccessDenied`], or
    /// [`MessageThreadError::Domain`] for a blank body.
    pub async fn post(
        &self,
        actor: &User,
        task_id: TaskId,
        content: impl Into<String> + Send,
    ) -> MessageThreadResult<Message> {
        self.gate.load_visible(actor.principal(), task_id).await?;

        let body = MessageContent::new(content)?;
        let message = self
            .messages
            .insert(NewMessage::new(task_id, actor.id(), body, &*self.clock))
            .await?;
        info!(actor = %actor.id(), task = %task_id, message = %message.id(), "message posted");
        Ok(message)
    }
}

fn to_view(message: &Message, authors: &HashMap<UserId, String>) -> MessageView {
    let user = authors.get(&message.author_id()).cloned().unwrap_or_default();
    MessageView {
        id: message.id(),
        user,
        content: message.content().clone(),
        created_at: message.created_at(),
    }
}
