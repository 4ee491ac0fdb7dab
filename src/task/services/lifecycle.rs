//! Service layer for task creation, editing, and board listing.

use super::access_gate::{TaskAccessError, TaskAccessGate};
use super::view::{TaskSummary, TaskView};
use crate::access::{AccessPolicy, MutationKind, TaskAudience, can_view, is_lower, is_mine};
use crate::error::ErrorKind;
use crate::identity::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use crate::status::{
    domain::{StatusId, StatusName},
    ports::{StatusCatalog, StatusCatalogError},
};
use crate::task::{
    domain::{
        AssigneeChange, NewTask, Task, TaskChanges, TaskDomainError, TaskId, TaskText, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    short_description: String,
    description: Option<String>,
    status_id: i64,
    assignee_id: Option<i64>,
}

impl CreateTaskRequest {
    /// Creates a request for an unassigned task in the given status.
    #[must_use]
    pub fn new(title: impl Into<String>, status_id: i64) -> Self {
        Self {
            title: title.into(),
            short_description: String::new(),
            description: None,
            status_id,
            assignee_id: None,
        }
    }

    /// Sets the one-line summary.
    #[must_use]
    pub fn with_short_description(mut self, short_description: impl Into<String>) -> Self {
        self.short_description = short_description.into();
        self
    }

    /// Sets the long description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assigns the task on creation.
    #[must_use]
    pub const fn with_assignee_id(mut self, assignee_id: i64) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }
}

/// Partial task update. Absent fields are left unchanged.
///
/// An `assignee_id` of `0` clears the assignee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    short_description: Option<String>,
    description: Option<String>,
    status_id: Option<i64>,
    assignee_id: Option<i64>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new one-line summary.
    #[must_use]
    pub fn with_short_description(mut self, short_description: impl Into<String>) -> Self {
        self.short_description = Some(short_description.into());
        self
    }

    /// Sets a new long description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Moves the task to the status with this identifier.
    #[must_use]
    pub const fn with_status_id(mut self, status_id: i64) -> Self {
        self.status_id = Some(status_id);
        self
    }

    /// Sets the assignee, or clears it with `0`.
    #[must_use]
    pub const fn with_assignee_id(mut self, assignee_id: i64) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Returns `true` when the patch touches the assignee.
    #[must_use]
    pub const fn reassigns(&self) -> bool {
        self.assignee_id.is_some()
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The access rules reject the action.
    #[error("access denied")]
    AccessDenied,
    /// The status reference does not resolve.
    #[error("invalid status: {0}")]
    InvalidStatus(String),
    /// The assignee reference does not resolve.
    #[error("invalid assignee_id: {0}")]
    InvalidAssignee(i64),
    /// A stored task points at a status missing from the catalog.
    #[error("task {task} has invalid status_id {status}")]
    DanglingStatus {
        /// Task holding the reference.
        task: TaskId,
        /// Missing status.
        status: StatusId,
    },
    /// A stored task points at an assignee missing from the directory.
    #[error("task {task} references missing assignee {assignee}")]
    DanglingAssignee {
        /// Task holding the reference.
        task: TaskId,
        /// Missing user.
        assignee: UserId,
    },
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task storage failed.
    #[error(transparent)]
    Tasks(TaskRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// Status lookup failed.
    #[error(transparent)]
    Statuses(#[from] StatusCatalogError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Tasks(other),
        }
    }
}

impl From<TaskAccessError> for TaskLifecycleError {
    fn from(err: TaskAccessError) -> Self {
        match err {
            TaskAccessError::NotFound(id) => Self::NotFound(id),
            TaskAccessError::AccessDenied => Self::AccessDenied,
            TaskAccessError::DanglingAssignee { task, assignee } => {
                Self::DanglingAssignee { task, assignee }
            }
            TaskAccessError::Tasks(inner) => inner.into(),
            TaskAccessError::Users(inner) => Self::Users(inner),
        }
    }
}

impl TaskLifecycleError {
    /// Classifies the error for transport mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AccessDenied => ErrorKind::AccessDenied,
            Self::InvalidStatus(_) | Self::InvalidAssignee(_) => ErrorKind::InvalidReference,
            Self::Domain(_) => ErrorKind::Validation,
            Self::DanglingStatus { .. }
            | Self::DanglingAssignee { .. }
            | Self::Tasks(_)
            | Self::Users(_)
            | Self::Statuses(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<T, U, S, C>
where
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    S: StatusCatalog + ?Sized,
    C: Clock + Send + Sync,
{
    gate: TaskAccessGate<T, U>,
    tasks: Arc<T>,
    users: Arc<U>,
    statuses: Arc<S>,
    clock: Arc<C>,
    policy: AccessPolicy,
}

impl<T, U, S, C> Clone for TaskLifecycleService<T, U, S, C>
where
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    S: StatusCatalog + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            tasks: Arc::clone(&self.tasks),
            users: Arc::clone(&self.users),
            statuses: Arc::clone(&self.statuses),
            clock: Arc::clone(&self.clock),
            policy: self.policy,
        }
    }
}

impl<T, U, S, C> TaskLifecycleService<T, U, S, C>
where
    T: TaskRepository + ?Sized,
    U: UserRepository + ?Sized,
    S: StatusCatalog + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default access policy.
    #[must_use]
    pub fn new(tasks: Arc<T>, users: Arc<U>, statuses: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            gate: TaskAccessGate::new(Arc::clone(&tasks), Arc::clone(&users)),
            tasks,
            users,
            statuses,
            clock,
            policy: AccessPolicy::default(),
        }
    }

    /// Replaces the access policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Creates a task on behalf of `actor`, who becomes its creator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AccessDenied`] for employees,
    /// [`TaskLifecycleError::InvalidStatus`] or
    /// [`TaskLifecycleError::InvalidAssignee`] for unresolved references,
    /// and [`TaskLifecycleError::Domain`] for an empty title.
    pub async fn create(
        &self,
        actor: &User,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.authorize(actor, MutationKind::Create, None)?;

        let CreateTaskRequest {
            title,
            short_description,
            description,
            status_id,
            assignee_id,
        } = request;
        let text = TaskText {
            title: TaskTitle::new(title)?,
            short_description,
            description,
        };
        let status = self.resolve_status_id(status_id).await?;
        let assignee = match assignee_id {
            Some(raw) => Some(self.resolve_assignee(raw).await?),
            None => None,
        };

        let new_task = NewTask::new(text, status, actor.id(), assignee, &*self.clock);
        let task = self.tasks.insert(new_task).await?;
        info!(
            actor = %actor.id(),
            task = %task.id(),
            status = %task.status_id(),
            assignee = ?task.assignee_id().map(UserId::value),
            "task created"
        );
        Ok(task)
    }

    /// Moves a task to the status with the given exact name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`], or
    /// [`TaskLifecycleError::InvalidStatus`], in that order of precedence.
    pub async fn update_status(
        &self,
        actor: &User,
        task_id: TaskId,
        status_name: &str,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.gate.load(task_id).await?;
        let audience = self.gate.audience(&task).await?;
        self.authorize(actor, MutationKind::ChangeStatus, Some(&audience))?;

        let invalid = || TaskLifecycleError::InvalidStatus(status_name.to_owned());
        let name = StatusName::new(status_name).map_err(|_| invalid())?;
        let status = self
            .statuses
            .find_by_name(&name)
            .await?
            .ok_or_else(invalid)?;

        task.change_status(status.id(), &*self.clock);
        self.tasks.update(&task).await?;
        info!(actor = %actor.id(), task = %task_id, status = %name, "task status changed");
        Ok(task)
    }

    /// Applies a partial update.
    ///
    /// Every reference in the patch is resolved before anything is written,
    /// so a failing patch leaves the task untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`],
    /// [`TaskLifecycleError::AccessDenied`], then reference or validation
    /// errors for the patch contents.
    pub async fn update_fields(
        &self,
        actor: &User,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.gate.load(task_id).await?;
        let audience = self.gate.audience(&task).await?;
        self.authorize(actor, MutationKind::UpdateFields, Some(&audience))?;
        if patch.reassigns() {
            self.authorize(actor, MutationKind::Reassign, Some(&audience))?;
        }

        let changes = self.resolve_patch(patch).await?;
        task.apply(changes, &*self.clock);
        self.tasks.update(&task).await?;
        info!(actor = %actor.id(), task = %task_id, "task updated");
        Ok(task)
    }

    /// Returns the full view of a visible task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] before
    /// [`TaskLifecycleError::AccessDenied`], and
    /// [`TaskLifecycleError::DanglingStatus`] for corrupt records.
    pub async fn get(&self, actor: &User, task_id: TaskId) -> TaskLifecycleResult<TaskView> {
        let (task, _) = self.gate.load_visible(actor.principal(), task_id).await?;

        let status = self
            .statuses
            .find_by_id(task.status_id())
            .await?
            .ok_or(TaskLifecycleError::DanglingStatus {
                task: task_id,
                status: task.status_id(),
            })?;
        let assignee = match task.assignee_id() {
            Some(assignee_id) => self.users.find_by_id(assignee_id).await?,
            None => None,
        };
        let creator = self.users.find_by_id(task.creator_id()).await?;

        debug!(actor = %actor.id(), task = %task_id, "task fetched");
        Ok(TaskView::new(
            &task,
            status.name().as_str().to_owned(),
            assignee.as_ref(),
            creator.as_ref(),
        ))
    }

    /// Lists every task the actor can see, in identifier order.
    ///
    /// Users and statuses are loaded once per call.
    ///
    /// # Errors
    ///
    /// Returns an internal error when storage fails or a record is corrupt.
    pub async fn list(&self, actor: &User) -> TaskLifecycleResult<Vec<TaskSummary>> {
        let viewer = actor.principal();
        let tasks = self.tasks.list_all().await?;
        let users: HashMap<UserId, User> = self
            .users
            .list()
            .await?
            .into_iter()
            .map(|user| (user.id(), user))
            .collect();
        let statuses: HashMap<StatusId, String> = self
            .statuses
            .list_ordered()
            .await?
            .into_iter()
            .map(|status| (status.id(), status.name().as_str().to_owned()))
            .collect();

        let mut summaries = Vec::new();
        for task in &tasks {
            let assignee = match task.assignee_id() {
                Some(assignee_id) => Some(users.get(&assignee_id).ok_or(
                    TaskLifecycleError::DanglingAssignee {
                        task: task.id(),
                        assignee: assignee_id,
                    },
                )?),
                None => None,
            };
            let audience =
                TaskAudience::new(task.creator_id(), assignee.map(User::principal));
            if !can_view(viewer, &audience) {
                continue;
            }

            let status = statuses.get(&task.status_id()).cloned().ok_or(
                TaskLifecycleError::DanglingStatus {
                    task: task.id(),
                    status: task.status_id(),
                },
            )?;
            let view = TaskView::new(task, status, assignee, users.get(&task.creator_id()));
            summaries.push(TaskSummary::new(
                view,
                is_mine(viewer, &audience),
                is_lower(viewer, &audience),
            ));
        }

        debug!(actor = %actor.id(), total = tasks.len(), visible = summaries.len(), "tasks listed");
        Ok(summaries)
    }

    fn authorize(
        &self,
        actor: &User,
        kind: MutationKind,
        audience: Option<&TaskAudience>,
    ) -> TaskLifecycleResult<()> {
        self.policy
            .authorize(actor.principal(), kind, audience)
            .map_err(|_| {
                warn!(actor = %actor.id(), role = %actor.role(), ?kind, "task mutation denied");
                TaskLifecycleError::AccessDenied
            })
    }

    async fn resolve_status_id(&self, raw: i64) -> TaskLifecycleResult<StatusId> {
        let status_id = StatusId::from_persisted(raw);
        match self.statuses.find_by_id(status_id).await? {
            Some(status) => Ok(status.id()),
            None => Err(TaskLifecycleError::InvalidStatus(raw.to_string())),
        }
    }

    async fn resolve_assignee(&self, raw: i64) -> TaskLifecycleResult<UserId> {
        match self.users.find_by_id(UserId::from_persisted(raw)).await? {
            Some(user) => Ok(user.id()),
            None => Err(TaskLifecycleError::InvalidAssignee(raw)),
        }
    }

    async fn resolve_patch(&self, patch: TaskPatch) -> TaskLifecycleResult<TaskChanges> {
        let TaskPatch {
            title,
            short_description,
            description,
            status_id,
            assignee_id,
        } = patch;

        let new_title = title.map(TaskTitle::new).transpose()?;
        let new_status = match status_id {
            Some(raw) => Some(self.resolve_status_id(raw).await?),
            None => None,
        };
        let assignee = match AssigneeChange::from_wire(assignee_id) {
            AssigneeChange::Assign(user_id) => {
                AssigneeChange::Assign(self.resolve_assignee(user_id.value()).await?)
            }
            other => other,
        };

        Ok(TaskChanges {
            title: new_title,
            short_description,
            description,
            status_id: new_status,
            assignee,
        })
    }
}
