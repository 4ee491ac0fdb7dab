//! Storage port for catalog entries.

use crate::status::domain::{NewStatus, Status, StatusId, StatusName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status catalog operations.
pub type StatusCatalogResult<T> = Result<T, StatusCatalogError>;

/// Append-only status storage contract.
#[async_trait]
pub trait StatusCatalog: Send + Sync {
    /// Appends an entry and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StatusCatalogError::DuplicateName`] when the name exists.
    async fn append(&self, status: NewStatus) -> StatusCatalogResult<Status>;

    /// Finds an entry by identifier.
    async fn find_by_id(&self, id: StatusId) -> StatusCatalogResult<Option<Status>>;

    /// Finds an entry by exact, case-sensitive name.
    async fn find_by_name(&self, name: &StatusName) -> StatusCatalogResult<Option<Status>>;

    /// Returns all entries ordered by board position, then identifier.
    async fn list_ordered(&self) -> StatusCatalogResult<Vec<Status>>;
}

/// Errors returned by status catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum StatusCatalogError {
    /// An entry with the same name already exists.
    #[error("duplicate status name: {0}")]
    DuplicateName(StatusName),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StatusCatalogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
