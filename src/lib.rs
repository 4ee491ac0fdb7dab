//! Taskdesk: a role-based team task tracker.
//!
//! Users hold one of four ranked roles (`employee < manager < ceo < admin`).
//! Tasks move through an ordered workflow of statuses, may be assigned to a
//! single user, and carry a chronological chat thread. Every read and write
//! passes through a single access policy that decides who may see and change
//! which task.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and hashing
//! - **Adapters**: In-memory and `PostgreSQL` implementations of ports
//! - **Services**: Orchestration that enforces the access policy
//!
//! # Modules
//!
//! - [`access`]: Role ranking, task visibility, and mutation rules
//! - [`identity`]: Users, roles, and credential hashing
//! - [`status`]: The ordered workflow catalog
//! - [`task`]: Task creation, editing, and filtered listings
//! - [`message`]: Per-task chat threads
//! - [`auth`]: Signed bearer tokens
//! - [`http`]: JSON-over-HTTP transport
//! - [`bootstrap`], [`config`], [`database`], [`logging`]: Process wiring
//!
//! # Example
//!
//! ```
//! use taskdesk::access::{Principal, TaskAudience, can_view};
//! use taskdesk::identity::domain::{Role, UserId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = Principal::new(UserId::new(2)?, Role::Manager);
//! let employee = Principal::new(UserId::new(3)?, Role::Employee);
//! let task = TaskAudience::new(manager.id(), Some(manager));
//!
//! assert!(can_view(manager, &task));
//! assert!(!can_view(employee, &task));
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod database;
pub mod error;
pub mod http;
pub mod identity;
pub mod logging;
pub mod message;
pub mod status;
pub mod task;
