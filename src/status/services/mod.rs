//! Application services for the status catalog.

mod catalog;

pub use catalog::{StatusCatalogService, StatusServiceError};
