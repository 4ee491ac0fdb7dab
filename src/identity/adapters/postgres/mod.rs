//! `PostgreSQL` adapters for user directory persistence.

mod models;
mod repository;
pub(crate) mod schema;

pub use repository::PostgresUserRepository;
