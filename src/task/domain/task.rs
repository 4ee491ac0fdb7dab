//! Task aggregate root and related change types.

use super::{TaskId, TaskTitle};
use crate::identity::domain::UserId;
use crate::status::domain::StatusId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Human-readable text of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskText {
    /// Title shown on the board.
    pub title: TaskTitle,
    /// One-line summary. May be empty.
    pub short_description: String,
    /// Long description.
    pub description: Option<String>,
}

/// Requested change to a task's assignee.
///
/// On the wire an absent `assignee_id` keeps the current assignee, `0`
/// clears it, and any other value names a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssigneeChange {
    /// Leave the assignee unchanged.
    #[default]
    Keep,
    /// Return the task to the open pool.
    Unassign,
    /// Assign the task to the given user.
    Assign(UserId),
}

impl AssigneeChange {
    /// Interprets a raw `assignee_id` field, honouring the `0` sentinel.
    #[must_use]
    pub const fn from_wire(raw: Option<i64>) -> Self {
        match raw {
            None => Self::Keep,
            Some(0) => Self::Unassign,
            Some(id) => Self::Assign(UserId::from_persisted(id)),
        }
    }
}

/// Validated, fully resolved partial update. Absent fields are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// New title.
    pub title: Option<TaskTitle>,
    /// New short description.
    pub short_description: Option<String>,
    /// New long description.
    pub description: Option<String>,
    /// New workflow status.
    pub status_id: Option<StatusId>,
    /// Assignee change.
    pub assignee: AssigneeChange,
}

/// Task record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    text: TaskText,
    status_id: StatusId,
    creator_id: UserId,
    assignee_id: Option<UserId>,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates an unsaved task stamped with the current clock time.
    #[must_use]
    pub fn new(
        text: TaskText,
        status_id: StatusId,
        creator_id: UserId,
        assignee_id: Option<UserId>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            text,
            status_id,
            creator_id,
            assignee_id,
            created_at: clock.utc(),
        }
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status_id(&self) -> StatusId {
        self.status_id
    }

    /// Returns the creator.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// Returns the initial assignee.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches a store-assigned identifier, producing a persisted task.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            text: self.text,
            status_id: self.status_id,
            creator_id: self.creator_id,
            assignee_id: self.assignee_id,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted text.
    pub text: TaskText,
    /// Persisted status reference.
    pub status_id: StatusId,
    /// Persisted creator reference.
    pub creator_id: UserId,
    /// Persisted assignee reference, if any.
    pub assignee_id: Option<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    status_id: StatusId,
    creator_id: UserId,
    assignee_id: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            status_id: data.status_id,
            creator_id: data.creator_id,
            assignee_id: data.assignee_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status_id(&self) -> StatusId {
        self.status_id
    }

    /// Returns the creator. Never changes after creation.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to another status. Any status may follow any other.
    pub fn change_status(&mut self, status_id: StatusId, clock: &impl Clock) {
        self.status_id = status_id;
        self.touch(clock);
    }

    /// Applies a resolved partial update in one step.
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) {
        let TaskChanges {
            title,
            short_description,
            description,
            status_id,
            assignee,
        } = changes;

        if let Some(value) = title {
            self.text.title = value;
        }
        if let Some(value) = short_description {
            self.text.short_description = value;
        }
        if let Some(value) = description {
            self.text.description = Some(value);
        }
        if let Some(value) = status_id {
            self.status_id = value;
        }
        match assignee {
            AssigneeChange::Keep => {}
            AssigneeChange::Unassign => self.assignee_id = None,
            AssigneeChange::Assign(user_id) => self.assignee_id = Some(user_id),
        }
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
