//! Read models returned by the task lifecycle service.

use crate::identity::domain::{Role, User, UserId, Username};
use crate::task::domain::{Task, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Full view of a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: TaskTitle,
    /// One-line summary.
    pub short_description: String,
    /// Long description.
    pub description: Option<String>,
    /// Current status name.
    pub status: String,
    /// Assignee username.
    pub assignee: Option<Username>,
    /// Assignee identifier.
    pub assignee_id: Option<UserId>,
    /// Assignee role.
    pub assignee_role: Option<Role>,
    /// Creator username, absent when the creator record is gone.
    pub created_by: Option<Username>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskView {
    pub(super) fn new(
        task: &Task,
        status: String,
        assignee: Option<&User>,
        creator: Option<&User>,
    ) -> Self {
        let text = task.text();
        Self {
            id: task.id(),
            title: text.title.clone(),
            short_description: text.short_description.clone(),
            description: text.description.clone(),
            status,
            assignee: assignee.map(|user| user.username().clone()),
            assignee_id: assignee.map(User::id),
            assignee_role: assignee.map(User::role),
            created_by: creator.map(|user| user.username().clone()),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// One row of the task board, annotated for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: TaskTitle,
    /// One-line summary.
    pub short_description: String,
    /// Current status name.
    pub status: String,
    /// Assignee username.
    pub assignee: Option<Username>,
    /// Assignee identifier.
    pub assignee_id: Option<UserId>,
    /// Assignee role.
    pub assignee_role: Option<Role>,
    /// Creator username.
    pub created_by: Option<Username>,
    /// Assigned to the viewer, or in the open pool.
    pub is_mine: bool,
    /// Assigned to someone the viewer outranks.
    pub is_lower: bool,
}

impl TaskSummary {
    pub(super) fn new(view: TaskView, is_mine: bool, is_lower: bool) -> Self {
        let TaskView {
            id,
            title,
            short_description,
            status,
            assignee,
            assignee_id,
            assignee_role,
            created_by,
            ..
        } = view;
        Self {
            id,
            title,
            short_description,
            status,
            assignee,
            assignee_id,
            assignee_role,
            created_by,
            is_mine,
            is_lower,
        }
    }
}
