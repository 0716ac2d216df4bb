//! Diesel table definitions matching `backend/migrations`.

diesel::table! {
    /// Todo list entries keyed by a client-chosen UUID.
    todo_items (id) {
        id -> Uuid,
        /// At most 100 characters.
        description -> Varchar,
        is_completed -> Bool,
        created_at -> Timestamptz,
        modified_at -> Timestamptz,
    }
}
