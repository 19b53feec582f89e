//! Ranking read models.
//!
//! Ranking is a pure function of the current user store: points descending,
//! then earlier registration, then identifier ascending.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::user::{DisplayName, User, UserId};

/// Most users returned by a leaderboard listing.
pub const LEADERBOARD_CAP: usize = 100;

/// Total ordering applied to leaderboard rows.
pub fn ranking_order(left: &User, right: &User) -> Ordering {
    right
        .total_points()
        .cmp(&left.total_points())
        .then_with(|| left.created_at().cmp(&right.created_at()))
        .then_with(|| left.id().as_uuid().cmp(right.id().as_uuid()))
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub id: UserId,
    pub name: DisplayName,
    pub points: u64,
    /// 1-based, contiguous position.
    pub rank: u32,
    pub joined_at: DateTime<Utc>,
}

/// Rank active users, dropping inactive ones and truncating to
/// [`LEADERBOARD_CAP`].
///
/// Storage adapters may pre-sort and pre-limit; this function re-applies the
/// ordering so the result does not depend on adapter behaviour.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use leaderboard::domain::{rank_users, DisplayName, EmailAddress, User, UserId};
///
/// let user = User::new(
///     UserId::random(),
///     DisplayName::new("Ada").unwrap(),
///     EmailAddress::new("ada@example.com").unwrap(),
///     Utc::now(),
/// );
/// let ranked = rank_users(vec![user]);
/// assert_eq!(ranked[0].rank, 1);
/// ```
pub fn rank_users(mut users: Vec<User>) -> Vec<LeaderboardEntry> {
    users.retain(User::is_active);
    users.sort_by(ranking_order);
    users.truncate(LEADERBOARD_CAP);
    users
        .into_iter()
        .zip(1_u32..)
        .map(|(user, rank)| LeaderboardEntry {
            id: user.id().clone(),
            name: user.display_name().clone(),
            points: user.total_points(),
            rank,
            joined_at: user.created_at(),
        })
        .collect()
}

/// Public view of a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: DisplayName,
    pub points: u64,
    pub joined_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().clone(),
            name: user.display_name().clone(),
            points: user.total_points(),
            joined_at: user.created_at(),
        }
    }
}

/// Highest-ranked active user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopUser {
    pub id: UserId,
    pub name: DisplayName,
    pub points: u64,
}

/// Aggregate leaderboard figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardStats {
    /// Active users only.
    pub total_users: u64,
    pub total_claims: u64,
    /// Sum of every recorded claim.
    pub total_points_awarded: u64,
    pub top_user: Option<TopUser>,
}
