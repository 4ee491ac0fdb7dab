//! Shared fixtures for in-memory integration tests.

use rstest::fixture;
use std::sync::Arc;
use taskdesk::access::AccessPolicy;
use taskdesk::bootstrap::{Services, Stores};
use taskdesk::identity::{
    domain::{Password, PasswordHash, Role, User},
    ports::{CredentialError, CredentialHasher},
};

/// Reversible hasher so integration tests avoid Argon2 cost.
pub struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError> {
        Ok(PasswordHash::from_encoded(format!("plain:{}", password.expose())))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        hash.as_str() == format!("plain:{}", password.expose())
    }
}

/// Services bound to fresh in-memory stores.
pub struct Workspace {
    pub stores: Stores,
    pub services: Services,
}

impl Workspace {
    /// Builds a workspace under the given access policy.
    pub fn with_policy(policy: AccessPolicy) -> Self {
        let stores = Stores::in_memory();
        let services = Services::new(&stores, Arc::new(PlainHasher), policy);
        Self { stores, services }
    }

    /// Seeds the default workflow.
    pub async fn with_statuses(self) -> Self {
        self.services
            .statuses
            .seed_defaults()
            .await
            .expect("default statuses should seed");
        self
    }

    /// Creates or fetches a user with a throwaway password.
    pub async fn user(&self, name: &str, role: Role) -> User {
        self.services
            .users
            .ensure_user(name, "secret", role)
            .await
            .expect("user should be created")
    }
}

/// Workspace with the default policy and workflow.
#[fixture]
pub async fn workspace() -> Workspace {
    Workspace::with_policy(AccessPolicy::default())
        .with_statuses()
        .await
}
