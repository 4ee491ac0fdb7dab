//! Port contracts for message threads.

pub mod repository;

pub use repository::{MessageRepository, MessageRepositoryError, MessageRepositoryResult};
