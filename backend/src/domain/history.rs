//! Claim history read models.

use chrono::{DateTime, Utc};
use pagination::PageInfo;

use super::points::{ClaimId, ClaimPoints};
use super::user::UserId;

/// Page size for the global history when the caller omits `limit`.
pub const DEFAULT_GLOBAL_LIMIT: u32 = 50;
/// Page size for a single user's history when the caller omits `limit`.
pub const DEFAULT_USER_LIMIT: u32 = 20;

/// Which claims a history query covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryScope {
    /// Every claim in the ledger.
    All,
    /// Claims whose target is the given user.
    Target(UserId),
}

impl HistoryScope {
    /// Page size applied when the caller omits `limit`.
    pub fn default_limit(&self) -> u32 {
        match self {
            Self::All => DEFAULT_GLOBAL_LIMIT,
            Self::Target(_) => DEFAULT_USER_LIMIT,
        }
    }
}

/// Claim resolved to display names for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimHistoryEntry {
    pub id: ClaimId,
    pub user_name: String,
    pub points: ClaimPoints,
    pub claimed_by: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

/// One page of claim history, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPage {
    pub entries: Vec<ClaimHistoryEntry>,
    pub pagination: PageInfo,
}
