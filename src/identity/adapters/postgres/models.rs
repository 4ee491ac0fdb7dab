//! Diesel row models for user persistence.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Credential hash.
    pub password_hash: String,
    /// Role tag.
    pub role: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Login name.
    pub username: String,
    /// Credential hash.
    pub password_hash: String,
    /// Role tag.
    pub role: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Changeset applied when updating a user.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    /// Login name.
    pub username: String,
    /// Credential hash.
    pub password_hash: String,
    /// Role tag.
    pub role: String,
}
