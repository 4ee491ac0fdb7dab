//! Diesel schema for message persistence.

diesel::table! {
    /// Chat messages attached to tasks.
    messages (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Owning task.
        task_id -> Int8,
        /// Author reference.
        user_id -> Int8,
        /// Message body.
        content -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
