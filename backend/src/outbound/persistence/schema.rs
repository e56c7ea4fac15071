//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation; regenerate with `diesel print-schema` after a migration
//! changes the schema.

diesel::table! {
    /// Registered accounts.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique login email.
        email -> Varchar,
        /// Hex-encoded SHA-256 of the password.
        password_hash -> Varchar,
        /// Account role label (`USER` or `ADMIN`).
        role -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Trips, each owned by a single user.
    trips (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning user; foreign key to `users.id`.
        owner_id -> Uuid,
        /// Short human-readable title.
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Destination label.
        destination -> Varchar,
        /// First day of the trip.
        start_date -> Date,
        /// Last day of the trip.
        end_date -> Date,
        /// Planned budget, `numeric(10,2)`.
        budget -> Numeric,
        /// Cached sum of the trip's expense amounts, `numeric(10,2)`.
        total_expenses -> Numeric,
        /// Lifecycle status string.
        status -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Expenses recorded against a trip.
    expenses (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Parent trip; foreign key to `trips.id`.
        trip_id -> Uuid,
        /// Short human-readable title.
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Spent amount, `numeric(10,2)`.
        amount -> Numeric,
        /// Day the expense occurred.
        expense_date -> Date,
        /// Free-form category label.
        category -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Generated travel recommendations.
    ai_recommendations (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning user; foreign key to `users.id`.
        owner_id -> Uuid,
        /// Kind tag, currently always `TRAVEL`.
        kind -> Varchar,
        /// Generated (or fallback) text.
        content -> Text,
        /// Destination the recommendation was generated for.
        destination -> Varchar,
        /// Optional budget-range string echoed from the request.
        budget_range -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(trips -> users (owner_id));
diesel::joinable!(expenses -> trips (trip_id));
diesel::joinable!(ai_recommendations -> users (owner_id));

diesel::allow_tables_to_appear_in_same_query!(users, trips, expenses, ai_recommendations);
