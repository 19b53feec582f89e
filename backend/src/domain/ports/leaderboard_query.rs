//! Driving port for leaderboard read models.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Error, HistoryPage, HistoryScope, LeaderboardEntry, LeaderboardStats, UserId, UserProfile};

/// Domain use-case port for rankings, profiles, history, and stats.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardQuery: Send + Sync {
    /// Ranked active users, at most 100.
    async fn list_users(&self) -> Result<Vec<LeaderboardEntry>, Error>;

    /// Public profile of any user, active or not.
    async fn get_user(&self, id: &UserId) -> Result<UserProfile, Error>;

    /// One page of claim history for `scope`.
    async fn history(&self, scope: &HistoryScope, page: PageRequest)
    -> Result<HistoryPage, Error>;

    /// Aggregate figures across users and claims.
    async fn stats(&self) -> Result<LeaderboardStats, Error>;
}
