//! In-memory adapters for message thread ports.

mod message;

pub use message::InMemoryMessageRepository;
