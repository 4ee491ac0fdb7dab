//! Domain model for chat messages.

mod error;
mod message;

pub use error::MessageDomainError;
pub use message::{Message, MessageContent, MessageId, NewMessage, PersistedMessageData};
