//! In-memory adapters for user directory ports.

mod user;

pub use user::InMemoryUserRepository;
