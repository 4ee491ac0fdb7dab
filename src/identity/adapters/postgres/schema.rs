//! Diesel schema for user persistence.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Unique login name.
        #[max_length = 64]
        username -> Varchar,
        /// Argon2 PHC-encoded credential hash.
        password_hash -> Text,
        /// Role tag.
        #[max_length = 16]
        role -> Varchar,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
