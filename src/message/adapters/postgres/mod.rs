//! `PostgreSQL` adapters for message thread persistence.

mod models;
mod repository;
pub(crate) mod schema;

pub use repository::PostgresMessageRepository;
