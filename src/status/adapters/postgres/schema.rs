//! Diesel schema for the status catalog.

diesel::table! {
    /// Workflow statuses.
    statuses (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Unique status name.
        #[max_length = 64]
        name -> Varchar,
        /// Board position.
        order_index -> Int4,
    }
}
