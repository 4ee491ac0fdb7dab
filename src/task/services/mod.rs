//! Application services for task lifecycle orchestration.

mod access_gate;
mod lifecycle;
mod view;

pub use access_gate::{TaskAccessError, TaskAccessGate};
pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService, TaskPatch,
};
pub use view::{TaskSummary, TaskView};
