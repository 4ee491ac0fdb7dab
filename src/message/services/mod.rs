//! Application services for message threads.

mod thread;

pub use thread::{MessageThreadError, MessageThreadResult, MessageThreadService, MessageView};
