//! Domain model for tasks.
//!
//! Creator and assignee are plain user identifiers. They are resolved
//! against the user directory only when access rules or views need them.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{AssigneeChange, NewTask, PersistedTaskData, Task, TaskChanges, TaskText};
