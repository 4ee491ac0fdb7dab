//! `PostgreSQL` adapter for the status catalog.

mod catalog;
pub(crate) mod schema;

pub use catalog::PostgresStatusCatalog;
