//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// One-line summary.
    pub short_description: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Current workflow status.
    pub status_id: i64,
    /// Creator reference.
    pub created_by: i64,
    /// Optional assignee reference.
    pub assignee_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// One-line summary.
    pub short_description: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Initial workflow status.
    pub status_id: i64,
    /// Creator reference.
    pub created_by: i64,
    /// Optional assignee reference.
    pub assignee_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Initial update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied when updating a task.
///
/// `treat_none_as_null` lets an update clear the assignee.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// One-line summary.
    pub short_description: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Current workflow status.
    pub status_id: i64,
    /// Optional assignee reference.
    pub assignee_id: Option<i64>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
