//! Port contracts for the user directory.

pub mod hasher;
pub mod repository;

pub use hasher::{CredentialError, CredentialHasher};
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
