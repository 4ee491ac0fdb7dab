//! In-memory status catalog for tests and database-less runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::status::{
    domain::{NewStatus, Status, StatusId, StatusName},
    ports::{StatusCatalog, StatusCatalogError, StatusCatalogResult},
};

/// Thread-safe in-memory status catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusCatalog {
    entries: Arc<RwLock<Vec<Status>>>,
}

impl InMemoryStatusCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> StatusCatalogError {
    StatusCatalogError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl StatusCatalog for InMemoryStatusCatalog {
    async fn append(&self, status: NewStatus) -> StatusCatalogResult<Status> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        if entries.iter().any(|entry| entry.name() == &status.name) {
            return Err(StatusCatalogError::DuplicateName(status.name));
        }
        let next_id = entries
            .iter()
            .map(|entry| entry.id().value())
            .max()
            .unwrap_or(0)
            + 1;
        let stored = Status::new(
            StatusId::from_persisted(next_id),
            status.name,
            status.order_index,
        );
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: StatusId) -> StatusCatalogResult<Option<Status>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.iter().find(|entry| entry.id() == id).cloned())
    }

    async fn find_by_name(&self, name: &StatusName) -> StatusCatalogResult<Option<Status>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.iter().find(|entry| entry.name() == name).cloned())
    }

    async fn list_ordered(&self) -> StatusCatalogResult<Vec<Status>> {
        let entries = self.entries.read().map_err(lock_error)?;
        let mut ordered = entries.to_vec();
        ordered.sort_by_key(|entry| (entry.order_index(), entry.id()));
        Ok(ordered)
    }
}
