//! Request handlers grouped by resource.

pub(super) mod auth;
pub(super) mod health;
pub(super) mod messages;
pub(super) mod statuses;
pub(super) mod tasks;
pub(super) mod users;
