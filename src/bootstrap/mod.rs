//! Process wiring and first-start seeding.
//!
//! [`Stores`] is the explicitly constructed store handle; [`Services`]
//! binds the application services to it. Both are built once at process
//! start and passed to the transport layer.

mod demo;


pub use demo::seed_demo_data;

use crate::access::AccessPolicy;
use crate::config::BootstrapConfig;
use crate::database::DbPool;
use crate::identity::{
    adapters::{memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    domain::Role,
    ports::{CredentialHasher, UserRepository},
    services::{UserDirectoryError, UserDirectoryService},
};
use crate::message::{
    adapters::{memory::InMemoryMessageRepository, postgres::PostgresMessageRepository},
    ports::MessageRepository,
    services::{MessageThreadError, MessageThreadService},
};
use crate::status::{
    adapters::{memory::InMemoryStatusCatalog, postgres::PostgresStatusCatalog},
    ports::StatusCatalog,
    services::{StatusCatalogService, StatusServiceError},
};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::{TaskRepository, TaskRepositoryError},
    services::{TaskLifecycleError, TaskLifecycleService},
};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// User directory bound to dynamic stores.
pub type UserDirectory =
    UserDirectoryService<dyn UserRepository, dyn CredentialHasher, DefaultClock>;

/// Status catalog service bound to a dynamic store.
pub type StatusDirectory = StatusCatalogService<dyn StatusCatalog>;

/// Task lifecycle service bound to dynamic stores.
pub type TaskLifecycle =
    TaskLifecycleService<dyn TaskRepository, dyn UserRepository, dyn StatusCatalog, DefaultClock>;

/// Message thread service bound to dynamic stores.
pub type MessageThread = MessageThreadService<
    dyn MessageRepository,
    dyn TaskRepository,
    dyn UserRepository,
    DefaultClock,
>;

/// One handle per store, shared by every service.
#[derive(Clone)]
pub struct Stores {
    /// User records.
    pub users: Arc<dyn UserRepository>,
    /// Workflow statuses.
    pub statuses: Arc<dyn StatusCatalog>,
    /// Tasks.
    pub tasks: Arc<dyn TaskRepository>,
    /// Chat messages.
    pub messages: Arc<dyn MessageRepository>,
}

impl Stores {
    /// Creates empty in-memory stores.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            statuses: Arc::new(InMemoryStatusCatalog::new()),
            tasks: Arc::new(InMemoryTaskRepository::new()),
            messages: Arc::new(InMemoryMessageRepository::new()),
        }
    }

    /// Creates `PostgreSQL` stores sharing one pool.
    #[must_use]
    pub fn postgres(pool: &DbPool) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            statuses: Arc::new(PostgresStatusCatalog::new(pool.clone())),
            tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
            messages: Arc::new(PostgresMessageRepository::new(pool.clone())),
        }
    }
}

/// Application services bound to one set of stores.
#[derive(Clone)]
pub struct Services {
    /// User directory.
    pub users: UserDirectory,
    /// Status catalog.
    pub statuses: StatusDirectory,
    /// Task lifecycle.
    pub tasks: TaskLifecycle,
    /// Message threads.
    pub messages: MessageThread,
}

impl Services {
    /// Wires every service to `stores`.
    #[must_use]
    pub fn new(stores: &Stores, hasher: Arc<dyn CredentialHasher>, policy: AccessPolicy) -> Self {
        let clock = Arc::new(DefaultClock);
        Self {
            users: UserDirectoryService::new(
                Arc::clone(&stores.users),
                hasher,
                Arc::clone(&clock),
            ),
            statuses: StatusCatalogService::new(Arc::clone(&stores.statuses)),
            tasks: TaskLifecycleService::new(
                Arc::clone(&stores.tasks),
                Arc::clone(&stores.users),
                Arc::clone(&stores.statuses),
                Arc::clone(&clock),
            )
            .with_policy(policy),
            messages: MessageThreadService::new(
                Arc::clone(&stores.messages),
                Arc::clone(&stores.tasks),
                Arc::clone(&stores.users),
                clock,
            ),
        }
    }
}

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Catalog seeding failed.
    #[error(transparent)]
    Statuses(#[from] StatusServiceError),
    /// User seeding failed.
    #[error(transparent)]
    Users(#[from] UserDirectoryError),
    /// Task seeding failed.
    #[error(transparent)]
    Tasks(#[from] TaskLifecycleError),
    /// Message seeding failed.
    #[error(transparent)]
    Messages(#[from] MessageThreadError),
    /// The task store could not be inspected.
    #[error(transparent)]
    TaskStore(#[from] TaskRepositoryError),
    /// A demo user referenced by the data set was not created.
    #[error("demo user missing: {0}")]
    MissingUser(String),
    /// A default status is missing after catalog seeding.
    #[error("status missing from catalog: {0}")]
    MissingStatus(String),
}

/// Seeds the catalog, the configured administrator, and optionally demo
/// data. Safe to run on every start.
///
/// # Errors
///
/// Returns [`BootstrapError`] when any seeding step fails.
pub async fn seed(
    services: &Services,
    stores: &Stores,
    config: &BootstrapConfig,
) -> Result<(), BootstrapError> {
    services.statuses.seed_defaults().await?;

    if let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) {
        let admin = services
            .users
            .ensure_user(username, password, Role::Admin)
            .await?;
        info!(user = %admin.id(), username = %admin.username(), "administrator ready");
    }

    if config.demo_data {
        seed_demo_data(services, stores).await?;
    }
    Ok(())
}
