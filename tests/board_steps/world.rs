//! Shared world state for task board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use rstest::fixture;
use taskdesk::access::AccessPolicy;
use taskdesk::bootstrap::{Services, Stores};
use taskdesk::error::ErrorKind;
use taskdesk::identity::{
    domain::{Password, PasswordHash, Role, User},
    ports::{CredentialError, CredentialHasher},
};
use taskdesk::message::services::MessageView;
use taskdesk::task::{domain::TaskId, services::TaskSummary};

/// Reversible hasher so scenarios avoid Argon2 cost.
struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError> {
        Ok(PasswordHash::from_encoded(format!("plain:{}", password.expose())))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        hash.as_str() == format!("plain:{}", password.expose())
    }
}

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub services: Services,
    pub users: HashMap<String, User>,
    pub tasks: HashMap<String, TaskId>,
    pub auditor: Option<User>,
    pub listing: Vec<TaskSummary>,
    pub thread: Vec<MessageView>,
    pub last_failure: Option<ErrorKind>,
}

impl BoardWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let stores = Stores::in_memory();
        let services = Services::new(&stores, Arc::new(PlainHasher), AccessPolicy::default());
        Self {
            services,
            users: HashMap::new(),
            tasks: HashMap::new(),
            auditor: None,
            listing: Vec::new(),
            thread: Vec::new(),
            last_failure: None,
        }
    }

    /// Seeds the workflow and an admin observer on first use.
    pub fn ensure_ready(&mut self) -> Result<(), eyre::Report> {
        if self.auditor.is_some() {
            return Ok(());
        }
        run_async(self.services.statuses.seed_defaults())?;
        let auditor = run_async(self.services.users.ensure_user(
            "auditor",
            "auditor",
            Role::Admin,
        ))?;
        self.auditor = Some(auditor);
        Ok(())
    }

    /// Looks up a scenario user by name.
    pub fn user(&self, name: &str) -> Result<User, eyre::Report> {
        self.users
            .get(name)
            .cloned()
            .ok_or_else(|| eyre::eyre!("unknown scenario user {name}"))
    }

    /// Looks up a scenario task by title.
    pub fn task(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown scenario task {title}"))
    }

    /// Returns the admin observer used for unrestricted reads.
    pub fn auditor(&self) -> Result<User, eyre::Report> {
        self.auditor
            .clone()
            .ok_or_else(|| eyre::eyre!("scenario world was not initialised"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
