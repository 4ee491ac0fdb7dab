//! Domain model for workflow statuses.

mod error;
mod status;

pub use error::StatusDomainError;
pub use status::{DEFAULT_WORKFLOW, NewStatus, Status, StatusId, StatusName};
