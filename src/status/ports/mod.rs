//! Port contracts for the status catalog.

pub mod catalog;

pub use catalog::{StatusCatalog, StatusCatalogError, StatusCatalogResult};
