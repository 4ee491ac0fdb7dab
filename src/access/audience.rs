//! Inputs to the access rules.

use crate::identity::domain::{Role, UserId};

/// Identity and role of the user a rule is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Principal {
    id: UserId,
    role: Role,
}

impl Principal {
    /// Creates a principal.
    #[must_use]
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(self) -> UserId {
        self.id
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(self) -> Role {
        self.role
    }
}

/// The people with a stake in a task: its creator and, if any, its
/// assignee with the assignee's current role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskAudience {
    creator: UserId,
    assignee: Option<Principal>,
}

impl TaskAudience {
    /// Creates an audience.
    #[must_use]
    pub const fn new(creator: UserId, assignee: Option<Principal>) -> Self {
        Self { creator, assignee }
    }

    /// Returns the creator.
    #[must_use]
    pub const fn creator(&self) -> UserId {
        self.creator
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<Principal> {
        self.assignee
    }

    /// Returns `true` for open pool tasks.
    #[must_use]
    pub const fn is_open_pool(&self) -> bool {
        self.assignee.is_none()
    }
}
