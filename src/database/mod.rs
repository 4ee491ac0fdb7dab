//! `PostgreSQL` connection pool and schema bootstrap.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;
use tracing::info;

/// Shared connection pool used by every `PostgreSQL` adapter.
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent DDL for every table the service owns.
pub const SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_taskdesk_tables/up.sql");

/// Errors raised while opening or preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    /// A schema statement failed.
    #[error("schema error: {0}")]
    Schema(#[from] diesel::result::Error),
    /// The blocking worker panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds a connection pool.
///
/// # Errors
///
/// Returns [`DatabaseError::Pool`] when the initial connections cannot be
/// established.
pub fn connect(url: &str, max_connections: u32) -> Result<DbPool, DatabaseError> {
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder().max_size(max_connections).build(manager)?;
    info!(max_connections, "database pool ready");
    Ok(pool)
}

/// Creates any missing tables and indexes.
///
/// # Errors
///
/// Returns [`DatabaseError`] when a connection cannot be obtained or a
/// statement fails.
pub async fn apply_schema(pool: &DbPool) -> Result<(), DatabaseError> {
    let handle = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), DatabaseError> {
        let mut connection = handle.get()?;
        connection.batch_execute(SCHEMA_SQL)?;
        Ok(())
    })
    .await??;
    info!("database schema applied");
    Ok(())
}
