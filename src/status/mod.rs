//! Workflow status catalog.
//!
//! The catalog is a small ordered set of named workflow states seeded once
//! at startup and treated as append-only reference data afterwards. Task
//! status changes resolve names against it with exact, case-sensitive
//! matching.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
