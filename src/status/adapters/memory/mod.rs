//! In-memory status catalog.

mod catalog;

pub use catalog::InMemoryStatusCatalog;
