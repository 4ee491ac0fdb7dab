//! Status listing and seeding.

use crate::error::ErrorKind;
use crate::status::{
    domain::{DEFAULT_WORKFLOW, NewStatus, Status, StatusDomainError, StatusName},
    ports::{StatusCatalog, StatusCatalogError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for status catalog operations.
#[derive(Debug, Error)]
pub enum StatusServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] StatusDomainError),
    /// Catalog storage failed.
    #[error(transparent)]
    Catalog(#[from] StatusCatalogError),
}

impl StatusServiceError {
    /// Classifies the error for transport mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::Catalog(StatusCatalogError::DuplicateName(_)) => {
                ErrorKind::Validation
            }
            Self::Catalog(StatusCatalogError::Persistence(_)) => ErrorKind::Internal,
        }
    }
}

/// Read access to the catalog plus one-time seeding.
pub struct StatusCatalogService<S>
where
    S: StatusCatalog + ?Sized,
{
    catalog: Arc<S>,
}

impl<S> Clone for StatusCatalogService<S>
where
    S: StatusCatalog + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<S> StatusCatalogService<S>
where
    S: StatusCatalog + ?Sized,
{
    /// Creates a catalog service.
    #[must_use]
    pub const fn new(catalog: Arc<S>) -> Self {
        Self { catalog }
    }

    /// Lists the workflow in board order.
    ///
    /// # Errors
    ///
    /// Returns [`StatusServiceError::Catalog`] when storage fails.
    pub async fn list(&self) -> Result<Vec<Status>, StatusServiceError> {
        Ok(self.catalog.list_ordered().await?)
    }

    /// Appends every default workflow status that is missing.
    ///
    /// Existing entries are never modified. Returns how many entries were
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns [`StatusServiceError::Catalog`] when storage fails.
    pub async fn seed_defaults(&self) -> Result<usize, StatusServiceError> {
        let mut appended = 0;
        for (name, order_index) in DEFAULT_WORKFLOW {
            let status_name = StatusName::new(name)?;
            if self.catalog.find_by_name(&status_name).await?.is_some() {
                continue;
            }
            self.catalog
                .append(NewStatus {
                    name: status_name,
                    order_index,
                })
                .await?;
            appended += 1;
        }
        if appended > 0 {
            info!(appended, "status catalog seeded");
        }
        Ok(appended)
    }
}
