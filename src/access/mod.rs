//! Task visibility and mutation authorization.
//!
//! Every rule here is a pure function of a [`Principal`] and a
//! [`TaskAudience`]. Nothing is cached: callers re-evaluate the rules on
//! every read and before every mutation because roles and assignments can
//! change between calls.
//!
//! Visibility, first match wins:
//!
//! 1. A task with no assignee (an open pool task) is visible to everyone.
//! 2. The creator and the assignee always see the task.
//! 3. Anyone else sees it when their role ranks at or above the assignee's.
//!
//! Status changes are deliberately less restrictive than field edits: under
//! the default [`StatusChangeRule::AnyViewer`] any viewer may move a task
//! through the workflow, while title, description, and assignee edits
//! require manager rank.

mod audience;
mod policy;

pub use audience::{Principal, TaskAudience};
pub use policy::{
    AccessDenied, AccessPolicy, MutationKind, StatusChangeRule, can_manage_users, can_view,
    is_lower, is_mine,
};

#[cfg(test)]
mod tests;
