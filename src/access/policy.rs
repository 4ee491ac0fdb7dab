//! Visibility and authorization rules.

use super::{Principal, TaskAudience};
use crate::identity::domain::Role;
use serde::Deserialize;
use thiserror::Error;

/// Kind of change an actor intends to make to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// Create a new task.
    Create,
    /// Edit title, short description, or description.
    UpdateFields,
    /// Move the task to another workflow status.
    ChangeStatus,
    /// Set or clear the assignee.
    Reassign,
}

/// Who may move a task through the workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusChangeRule {
    /// Anyone who can view the task.
    #[default]
    AnyViewer,
    /// Viewers of manager rank or above.
    ManagersOnly,
}

/// Returned when a rule rejects an action.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("access denied")]
pub struct AccessDenied;

/// Mutation authorization with a configurable status-change rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    status_change: StatusChangeRule,
}

impl AccessPolicy {
    /// Creates a policy with the given status-change rule.
    #[must_use]
    pub const fn new(status_change: StatusChangeRule) -> Self {
        Self { status_change }
    }

    /// Returns the status-change rule in force.
    #[must_use]
    pub const fn status_change(&self) -> StatusChangeRule {
        self.status_change
    }

    /// Decides whether `actor` may perform `kind`.
    ///
    /// `task` is ignored for [`MutationKind::Create`]. Every other kind is
    /// denied when no task is supplied.
    #[must_use]
    pub fn can_mutate(
        &self,
        actor: Principal,
        kind: MutationKind,
        task: Option<&TaskAudience>,
    ) -> bool {
        let is_manager = actor.role().is_at_least(Role::Manager);
        match (kind, task) {
            (MutationKind::Create, _) => is_manager,
            (_, None) => false,
            (MutationKind::UpdateFields | MutationKind::Reassign, Some(audience)) => {
                is_manager && can_view(actor, audience)
            }
            (MutationKind::ChangeStatus, Some(audience)) => match self.status_change() {
                StatusChangeRule::AnyViewer => can_view(actor, audience),
                StatusChangeRule::ManagersOnly => is_manager && can_view(actor, audience),
            },
        }
    }

    /// Like [`Self::can_mutate`], reporting a denial as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the action is not permitted.
    pub fn authorize(
        &self,
        actor: Principal,
        kind: MutationKind,
        task: Option<&TaskAudience>,
    ) -> Result<(), AccessDenied> {
        if self.can_mutate(actor, kind, task) {
            Ok(())
        } else {
            Err(AccessDenied)
        }
    }
}

/// Decides whether `viewer` may read the task.
#[must_use]
pub fn can_view(viewer: Principal, task: &TaskAudience) -> bool {
    let Some(assignee) = task.assignee() else {
        return true;
    };
    if viewer.id() == assignee.id() || viewer.id() == task.creator() {
        return true;
    }
    viewer.role().is_at_least(assignee.role())
}

/// Registering accounts and changing another user's role or credentials is
/// reserved to admins and ceos.
#[must_use]
pub fn can_manage_users(actor: Principal) -> bool {
    matches!(actor.role(), Role::Admin | Role::Ceo)
}

/// Presentation hint: the task is assigned to the viewer or is in the open
/// pool.
#[must_use]
pub fn is_mine(viewer: Principal, task: &TaskAudience) -> bool {
    task.is_open_pool()
        || task
            .assignee()
            .is_some_and(|assignee| assignee.id() == viewer.id())
}

/// Presentation hint: the task belongs to someone the viewer strictly
/// outranks.
#[must_use]
pub fn is_lower(viewer: Principal, task: &TaskAudience) -> bool {
    task.assignee().is_some_and(|assignee| {
        viewer.role() > assignee.role() && !is_mine(viewer, task)
    })
}
