//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed leaderboard entities and the use-case
//! services that operate on them. Adapters reach the domain only through the
//! traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, Actor, DisplayName, EmailAddress, UserId: account identity.
//! - ClaimPoints, PointClaim, ClaimReceipt: claim events.
//! - LeaderboardEntry, UserProfile, LeaderboardStats: ranking read models.
//! - HistoryScope, HistoryPage: claim history read models.
//! - PointsService, LeaderboardService, AccountService: driving port
//!   implementations.

pub mod account_service;
pub mod auth;
pub mod error;
pub mod history;
pub mod leaderboard;
pub mod leaderboard_service;
pub mod points;
pub mod points_service;
pub(crate) mod port_errors;
pub mod ports;
#[cfg(test)]
pub(crate) mod test_fixtures;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{
    HashedPassword, LoginCredentials, LoginValidationError, NewAccount,
    RegistrationValidationError, StoredCredentials,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::history::{
    ClaimHistoryEntry, DEFAULT_GLOBAL_LIMIT, DEFAULT_USER_LIMIT, HistoryPage, HistoryScope,
};
pub use self::leaderboard::{
    LEADERBOARD_CAP, LeaderboardEntry, LeaderboardStats, TopUser, UserProfile, rank_users,
    ranking_order,
};
pub use self::leaderboard_service::LeaderboardService;
pub use self::points::{
    ClaimId, ClaimPoints, ClaimPointsOutOfRange, ClaimReceipt, MAX_CLAIM_POINTS,
    MIN_CLAIM_POINTS, PointClaim, default_description,
};
pub use self::points_service::PointsService;
pub use self::port_errors::{EMAIL_TAKEN, NAME_TAKEN};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Actor, DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, DisplayName, EmailAddress, User, UserId,
    UserValidationError,
};
