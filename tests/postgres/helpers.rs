//! Shared helpers for `PostgreSQL` integration tests.
//!
//! Each test gets its own database, cloned from a template that already
//! carries the schema, on the embedded cluster started by
//! `pg-embed-setup-unpriv`.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use pg_embedded_setup_unpriv::TestCluster;
use std::future::Future;
use std::sync::Arc;
use taskdesk::access::AccessPolicy;
use taskdesk::bootstrap::{Services, Stores};
use taskdesk::database;
use taskdesk::identity::{
    domain::{Password, PasswordHash, Role, User},
    ports::{CredentialError, CredentialHasher},
};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "taskdesk_test_template";

/// Boxed error type used by the suite.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError> {
        Ok(PasswordHash::from_encoded(format!("plain:{}", password.expose())))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        hash.as_str() == format!("plain:{}", password.expose())
    }
}

/// Drops the per-test database, even when the test panics.
struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(err) = self.cluster.drop_database(self.db_name.as_str()) {
            tracing::warn!(database = %self.db_name, error = %err, "failed to drop test database");
        }
    }
}

/// Services bound to a fresh `PostgreSQL` database.
///
/// Fields drop in order, so the pool inside `services` is closed before the
/// database is dropped.
pub struct PostgresContext {
    pub services: Services,
    runtime: Runtime,
    _database: CleanupGuard,
}

impl PostgresContext {
    /// Drives `future` to completion on the context's runtime.
    pub fn run<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Returns the identifier of the first workflow status.
    pub async fn first_status(&self) -> Result<i64, BoxError> {
        let statuses = self.services.statuses.list().await?;
        let first = statuses.first().ok_or("workflow is empty")?;
        Ok(first.id().value())
    }

    /// Creates a user with the password `secret`.
    pub async fn user(&self, username: &str, role: Role) -> Result<User, BoxError> {
        Ok(self
            .services
            .users
            .ensure_user(username, "secret", role)
            .await?)
    }
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if the template cannot be created or migrated.
pub fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(database::SCHEMA_SQL)
                .map_err(|e| eyre::eyre!("schema error: {e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)
}

/// Clones the template into a fresh database, re-applies the schema, and
/// seeds the workflow.
///
/// # Errors
///
/// Returns an error if the database cannot be created or prepared.
pub fn context(cluster: &'static TestCluster) -> Result<PostgresContext, BoxError> {
    ensure_template(cluster)?;
    let db_name = format!("taskdesk_test_{}", Uuid::new_v4().simple());
    cluster
        .create_database_from_template(db_name.as_str(), TEMPLATE_DB)
        .map_err(|e| Box::new(e) as BoxError)?;
    let url = cluster.connection().database_url(&db_name);
    let guard = CleanupGuard { cluster, db_name };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let services = runtime.block_on(async {
        let pool = database::connect(&url, 2)?;
        database::apply_schema(&pool).await?;
        let stores = Stores::postgres(&pool);
        let wired = Services::new(&stores, Arc::new(PlainHasher), AccessPolicy::default());
        wired.statuses.seed_defaults().await?;
        Ok::<Services, BoxError>(wired)
    })?;

    Ok(PostgresContext {
        services,
        runtime,
        _database: guard,
    })
}
