//! Port abstraction for the user store and its errors.
//!
//! The user store owns account records and their running point totals. The
//! only balance mutation it exposes is [`UserRepository::increment_points`],
//! which adapters must apply atomically at the storage layer.

use async_trait::async_trait;

use crate::domain::{ClaimPoints, DisplayName, EmailAddress, HashedPassword, StoredCredentials, User, UserId};

use super::port_error;

port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The email unique constraint rejected an insert.
        DuplicateEmail { email: String } => "email already registered: {email}",
        /// The display name unique constraint rejected an insert.
        DuplicateDisplayName { name: String } => "display name already taken: {name}",
    }
}

/// Driven port for user persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a newly registered user with its password hash.
    ///
    /// Unique violations surface as [`UserPersistenceError::DuplicateEmail`]
    /// or [`UserPersistenceError::DuplicateDisplayName`].
    async fn insert(
        &self,
        user: &User,
        password_hash: &HashedPassword,
    ) -> Result<(), UserPersistenceError>;

    /// Fetch a user by identifier, whether active or not.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch every user whose id appears in `ids`. Unknown ids are skipped and
    /// order is unspecified.
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserPersistenceError>;

    /// Look up the credential record for a normalised email.
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, UserPersistenceError>;

    /// Whether any user already has this email.
    async fn email_taken(&self, email: &EmailAddress) -> Result<bool, UserPersistenceError>;

    /// Whether any user already has this display name.
    async fn display_name_taken(&self, name: &DisplayName)
    -> Result<bool, UserPersistenceError>;

    /// Atomically add `points` to the user's total and return the updated
    /// record, or `None` when the user does not exist.
    async fn increment_points(
        &self,
        id: &UserId,
        points: ClaimPoints,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Active users in leaderboard order, at most `limit` of them.
    async fn list_ranked(&self, limit: usize) -> Result<Vec<User>, UserPersistenceError>;

    /// Number of active users.
    async fn count_active(&self) -> Result<u64, UserPersistenceError>;
}
