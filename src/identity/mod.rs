//! User directory and role hierarchy.
//!
//! Owns user records, the fixed role order used by access policies, and
//! credential handling. Credential material never leaves this module in a
//! recoverable form: only salted Argon2 hashes are stored, and listings
//! expose [`domain::UserSummary`] values that carry no credential data.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
