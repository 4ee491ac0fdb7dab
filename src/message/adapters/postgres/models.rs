//! Diesel row models for message persistence.

use super::schema::messages;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for messages.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning task.
    pub task_id: i64,
    /// Author reference.
    pub user_id: i64,
    /// Message body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for messages.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Owning task.
    pub task_id: i64,
    /// Author reference.
    pub user_id: i64,
    /// Message body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
