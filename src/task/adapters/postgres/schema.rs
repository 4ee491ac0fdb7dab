//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Task title.
        title -> Text,
        /// One-line summary.
        short_description -> Text,
        /// Optional long description.
        description -> Nullable<Text>,
        /// Current workflow status.
        status_id -> Int8,
        /// Creator reference.
        created_by -> Int8,
        /// Optional assignee reference.
        assignee_id -> Nullable<Int8>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
