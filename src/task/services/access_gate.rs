//! Existence and visibility checks shared by every task-scoped operation.

use crate::access::{Principal, TaskAudience, can_view};
use crate::error::ErrorKind;
use crate::identity::{
    domain::UserId,
    ports::{UserRepository, UserRepositoryError},
};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors raised while loading a task for an actor.
#[derive(Debug, Error)]
pub enum TaskAccessError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The actor may not see the task.
    #[error("access denied")]
    AccessDenied,
    /// The stored assignee is missing from the user directory.
    #[error("task {task} references missing assignee {assignee}")]
    DanglingAssignee {
        /// Task holding the reference.
        task: TaskId,
        /// Missing user.
        assignee: UserId,
    },
    /// Task storage failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

impl TaskAccessError {
    /// Classifies the error for transport mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AccessDenied => ErrorKind::AccessDenied,
            Self::DanglingAssignee { .. } | Self::Tasks(_) | Self::Users(_) => ErrorKind::Internal,
        }
    }
}

/// Loads tasks and resolves who has a stake in them.
///
/// Existence is always checked before visibility.
pub struct TaskAccessGate<T, U>
where
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    tasks: Arc<T>,
    users: Arc<U>,
}

impl<T, U> Clone for TaskAccessGate<T, U>
where
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            users: Arc::clone(&self.users),
        }
    }
}

impl<T, U> TaskAccessGate<T, U>
where
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    /// Creates a gate over the given stores.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>) -> Self {
        Self { tasks, users }
    }

    /// Loads a task without any access check.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::NotFound`] when the task does not exist.
    pub async fn load(&self, task_id: TaskId) -> Result<Task, TaskAccessError> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskAccessError::NotFound(task_id))
    }

    /// Resolves the creator and the assignee's current role.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::DanglingAssignee`] when the assignee no
    /// longer exists.
    pub async fn audience(&self, task: &Task) -> Result<TaskAudience, TaskAccessError> {
        let assignee = match task.assignee_id() {
            None => None,
            Some(assignee_id) => {
                let user = self.users.find_by_id(assignee_id).await?.ok_or(
                    TaskAccessError::DanglingAssignee {
                        task: task.id(),
                        assignee: assignee_id,
                    },
                )?;
                Some(user.principal())
            }
        };
        Ok(TaskAudience::new(task.creator_id(), assignee))
    }

    /// Loads a task the actor is allowed to see.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::NotFound`] first, then
    /// [`TaskAccessError::AccessDenied`] when the task is hidden from the
    /// actor.
    pub async fn load_visible(
        &self,
        actor: Principal,
        task_id: TaskId,
    ) -> Result<(Task, TaskAudience), TaskAccessError> {
        let task = self.load(task_id).await?;
        let audience = self.audience(&task).await?;
        if !can_view(actor, &audience) {
            warn!(actor = %actor.id(), task = %task_id, "task hidden from actor");
            return Err(TaskAccessError::AccessDenied);
        }
        Ok((task, audience))
    }
}
