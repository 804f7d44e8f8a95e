//! Diesel schema for task persistence.

diesel::table! {
    /// Task records shown on the board and backlog.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Priority storage string.
        #[max_length = 20]
        priority -> Varchar,
        /// Category storage string.
        #[max_length = 20]
        category -> Varchar,
        /// Status storage string.
        #[max_length = 20]
        status -> Varchar,
        /// List membership storage string.
        #[max_length = 20]
        list -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last edit timestamp.
        updated_at -> Timestamptz,
    }
}
