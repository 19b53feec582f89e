//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered leaderboard participants.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique display name (3 to 32 characters).
        display_name -> Varchar,
        /// Unique, lower-cased login email.
        email -> Varchar,
        /// Argon2 PHC string.
        password_hash -> Text,
        /// Running point balance, only ever incremented.
        total_points -> Int8,
        /// Soft-deactivation flag.
        is_active -> Bool,
        /// Registration timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only ledger of point claims.
    point_claims (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// User receiving the points.
        user_id -> Uuid,
        /// User who performed the claim.
        claimed_by -> Uuid,
        /// Award between 1 and 10.
        points -> Int2,
        /// Free-text description.
        description -> Text,
        /// Claim timestamp.
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, point_claims);
