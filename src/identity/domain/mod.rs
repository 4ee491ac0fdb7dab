//! Domain model for users, roles, and credentials.

mod credential;
mod error;
mod ids;
mod role;
mod user;

pub use credential::{Password, PasswordHash};
pub use error::{IdentityDomainError, ParseRoleError};
pub use ids::{UserId, Username};
pub use role::Role;
pub use user::{NewUser, PersistedUserData, User, UserSummary};
