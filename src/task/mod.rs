//! Task lifecycle management.
//!
//! Tasks move through the workflow defined by the status catalog. Any status
//! is reachable from any other by direct assignment; the catalog order is a
//! board layout, not a transition guard. Every read and mutation goes
//! through [`services::TaskAccessGate`], which checks existence before
//! applying the access rules so that a missing task always reports
//! `NotFound`.
//!
//! Concurrent updates to the same task are last-write-wins.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
