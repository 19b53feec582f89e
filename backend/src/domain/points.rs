//! Point claims: the append-only events that are the sole source of balance
//! changes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{Actor, DisplayName, UserId};

/// Smallest award a single claim can carry.
pub const MIN_CLAIM_POINTS: u8 = 1;
/// Largest award a single claim can carry.
pub const MAX_CLAIM_POINTS: u8 = 10;

/// Returned when a claim award falls outside `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("claim points must be between {MIN_CLAIM_POINTS} and {MAX_CLAIM_POINTS}, got {0}")]
pub struct ClaimPointsOutOfRange(pub i64);

/// Number of points awarded by one claim.
///
/// # Examples
/// ```
/// use leaderboard::domain::ClaimPoints;
///
/// assert!(ClaimPoints::new(10).is_ok());
/// assert!(ClaimPoints::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ClaimPoints(u8);

impl ClaimPoints {
    /// Smallest possible award.
    pub const MIN: Self = Self(MIN_CLAIM_POINTS);
    /// Largest possible award.
    pub const MAX: Self = Self(MAX_CLAIM_POINTS);

    /// Validate an award.
    pub fn new(value: u8) -> Result<Self, ClaimPointsOutOfRange> {
        if (MIN_CLAIM_POINTS..=MAX_CLAIM_POINTS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ClaimPointsOutOfRange(i64::from(value)))
        }
    }

    /// Raw award.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ClaimPoints {
    type Error = ClaimPointsOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i16> for ClaimPoints {
    type Error = ClaimPointsOutOfRange;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ClaimPointsOutOfRange(i64::from(value)))
            .and_then(Self::new)
    }
}

impl From<ClaimPoints> for u8 {
    fn from(value: ClaimPoints) -> Self {
        value.0
    }
}

impl From<ClaimPoints> for i16 {
    fn from(value: ClaimPoints) -> Self {
        i16::from(value.0)
    }
}

impl fmt::Display for ClaimPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a recorded claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(Uuid);

impl ClaimId {
    /// Generate a fresh claim identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable record of one claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointClaim {
    pub id: ClaimId,
    pub target: UserId,
    pub claimed_by: UserId,
    pub points: ClaimPoints,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl PointClaim {
    /// Record a claim by `actor` against `target` with the default
    /// description.
    pub fn record(
        actor: &Actor,
        target: UserId,
        points: ClaimPoints,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ClaimId::random(),
            target,
            claimed_by: actor.id().clone(),
            points,
            description: default_description(actor.name()),
            created_at,
        }
    }
}

/// Description attached to claims that do not carry their own.
pub fn default_description(actor_name: &DisplayName) -> String {
    format!("Points claimed by {actor_name}")
}

/// Outcome of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub claim_id: ClaimId,
    pub points: ClaimPoints,
    pub target_id: UserId,
    pub target_name: DisplayName,
    pub actor_name: DisplayName,
    pub timestamp: DateTime<Utc>,
    /// Target's balance after the increment was applied.
    pub new_total: u64,
}
