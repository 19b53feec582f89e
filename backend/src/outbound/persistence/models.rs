//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{point_claims, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub total_points: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for registering users.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub display_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub total_points: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Credential projection used by login.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialRow {
    pub id: Uuid,
    pub password_hash: String,
    pub is_active: bool,
}

/// Row struct for reading from the point_claims table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = point_claims)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PointClaimRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub claimed_by: Uuid,
    pub points: i16,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for appending claims.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = point_claims)]
pub(crate) struct NewPointClaimRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub claimed_by: Uuid,
    pub points: i16,
    pub description: &'a str,
    pub created_at: DateTime<Utc>,
}
