//! `PostgreSQL` status catalog implementation.

use super::schema::statuses;
use crate::database::DbPool;
use crate::status::{
    domain::{NewStatus, Status, StatusId, StatusName},
    ports::{StatusCatalog, StatusCatalogError, StatusCatalogResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Query result row for catalog entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
struct StatusRow {
    id: i64,
    name: String,
    order_index: i32,
}

/// Insert model for catalog entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = statuses)]
struct NewStatusRow {
    name: String,
    order_index: i32,
}

/// `PostgreSQL`-backed status catalog.
#[derive(Debug, Clone)]
pub struct PostgresStatusCatalog {
    pool: DbPool,
}

impl PostgresStatusCatalog {
    /// Creates a catalog from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> StatusCatalogResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StatusCatalogResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(StatusCatalogError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(StatusCatalogError::persistence)?
    }
}

#[async_trait]
impl StatusCatalog for PostgresStatusCatalog {
    async fn append(&self, status: NewStatus) -> StatusCatalogResult<Status> {
        let NewStatus { name, order_index } = status;
        let new_row = NewStatusRow {
            name: name.as_str().to_owned(),
            order_index,
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(statuses::table)
                .values(&new_row)
                .returning(StatusRow::as_returning())
                .get_result(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        StatusCatalogError::DuplicateName(name.clone())
                    }
                    other => StatusCatalogError::persistence(other),
                })?;
            row_to_status(row)
        })
        .await
    }

    async fn find_by_id(&self, id: StatusId) -> StatusCatalogResult<Option<Status>> {
        self.run_blocking(move |connection| {
            statuses::table
                .filter(statuses::id.eq(id.value()))
                .select(StatusRow::as_select())
                .first::<StatusRow>(connection)
                .optional()
                .map_err(StatusCatalogError::persistence)?
                .map(row_to_status)
                .transpose()
        })
        .await
    }

    async fn find_by_name(&self, name: &StatusName) -> StatusCatalogResult<Option<Status>> {
        let lookup = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            statuses::table
                .filter(statuses::name.eq(lookup))
                .select(StatusRow::as_select())
                .first::<StatusRow>(connection)
                .optional()
                .map_err(StatusCatalogError::persistence)?
                .map(row_to_status)
                .transpose()
        })
        .await
    }

    async fn list_ordered(&self) -> StatusCatalogResult<Vec<Status>> {
        self.run_blocking(move |connection| {
            statuses::table
                .order((statuses::order_index.asc(), statuses::id.asc()))
                .select(StatusRow::as_select())
                .load::<StatusRow>(connection)
                .map_err(StatusCatalogError::persistence)?
                .into_iter()
                .map(row_to_status)
                .collect()
        })
        .await
    }
}

fn row_to_status(row: StatusRow) -> StatusCatalogResult<Status> {
    let name = StatusName::new(row.name).map_err(StatusCatalogError::persistence)?;
    Ok(Status::new(
        StatusId::from_persisted(row.id),
        name,
        row.order_index,
    ))
}
