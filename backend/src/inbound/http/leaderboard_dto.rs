//! Request and response bodies for the leaderboard endpoints.
//!
//! Read models stay serde-free in the domain; these bodies fix the camelCase
//! wire shape and carry the OpenAPI schemas.

use pagination::PageInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    ClaimHistoryEntry, ClaimReceipt, LeaderboardEntry, LeaderboardStats, TopUser, UserProfile,
};

/// Login request body for `POST /api/v1/auth/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration body shared by `POST /api/v1/auth/register` and
/// `POST /api/v1/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Claim request body for `POST /api/v1/points/claim`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimRequest {
    #[schema(format = "uuid")]
    pub user_id: Option<String>,
}

/// Query string accepted by the history endpoints. Values stay raw so the
/// handler can report precise validation errors.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HistoryQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// One leaderboard row.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub points: u64,
    pub rank: u32,
    #[schema(format = "date-time")]
    pub joined_at: String,
}

impl From<LeaderboardEntry> for LeaderboardEntryBody {
    fn from(value: LeaderboardEntry) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            points: value.points,
            rank: value.rank,
            joined_at: value.joined_at.to_rfc3339(),
        }
    }
}

/// Response for `GET /api/v1/users`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsersResponseBody {
    pub users: Vec<LeaderboardEntryBody>,
}

/// Public profile of one user.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub points: u64,
    #[schema(format = "date-time")]
    pub joined_at: String,
}

impl From<UserProfile> for UserProfileBody {
    fn from(value: UserProfile) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            points: value.points,
            joined_at: value.joined_at.to_rfc3339(),
        }
    }
}

/// Response wrapping a single profile.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponseBody {
    pub user: UserProfileBody,
}

/// Response for the registration endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountCreatedBody {
    #[schema(example = "User created successfully")]
    pub message: String,
    pub user: UserSummaryBody,
}

/// Identifier, name, and balance of a user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserSummaryBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub points: u64,
}

impl From<UserProfile> for UserSummaryBody {
    fn from(value: UserProfile) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            points: value.points,
        }
    }
}

/// Claim half of a claim response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(minimum = 1, maximum = 10)]
    pub points: u8,
    pub user_name: String,
    pub claimed_by: String,
    #[schema(format = "date-time")]
    pub timestamp: String,
}

/// Response for `POST /api/v1/points/claim`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClaimResponseBody {
    #[schema(example = "Points claimed successfully")]
    pub message: String,
    pub claim: ClaimBody,
    pub user: UserSummaryBody,
}

impl From<ClaimReceipt> for ClaimResponseBody {
    fn from(value: ClaimReceipt) -> Self {
        let target_name = value.target_name.to_string();
        Self {
            message: "Points claimed successfully".to_owned(),
            claim: ClaimBody {
                id: value.claim_id.to_string(),
                points: value.points.value(),
                user_name: target_name.clone(),
                claimed_by: value.actor_name.to_string(),
                timestamp: value.timestamp.to_rfc3339(),
            },
            user: UserSummaryBody {
                id: value.target_id.to_string(),
                name: target_name,
                points: value.new_total,
            },
        }
    }
}

/// One history row.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub user_name: String,
    pub points: u8,
    pub claimed_by: String,
    #[schema(format = "date-time")]
    pub timestamp: String,
    pub description: String,
}

impl From<ClaimHistoryEntry> for HistoryEntryBody {
    fn from(value: ClaimHistoryEntry) -> Self {
        Self {
            id: value.id.to_string(),
            user_name: value.user_name,
            points: value.points.value(),
            claimed_by: value.claimed_by,
            timestamp: value.timestamp.to_rfc3339(),
            description: value.description,
        }
    }
}

/// Page position reported alongside history rows.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBody {
    pub current: u32,
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<PageInfo> for PaginationBody {
    fn from(value: PageInfo) -> Self {
        Self {
            current: value.current(),
            total: value.total(),
            has_next: value.has_next(),
            has_prev: value.has_prev(),
        }
    }
}

/// Response for the history endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryResponseBody {
    pub history: Vec<HistoryEntryBody>,
    pub pagination: PaginationBody,
}

/// Highest-ranked user in the stats payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopUserBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub points: u64,
}

impl From<TopUser> for TopUserBody {
    fn from(value: TopUser) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            points: value.points,
        }
    }
}

/// Aggregate figures.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsBody {
    pub total_users: u64,
    pub total_claims: u64,
    pub total_points_awarded: u64,
    pub top_user: Option<TopUserBody>,
}

impl From<LeaderboardStats> for StatsBody {
    fn from(value: LeaderboardStats) -> Self {
        Self {
            total_users: value.total_users,
            total_claims: value.total_claims,
            total_points_awarded: value.total_points_awarded,
            top_user: value.top_user.map(TopUserBody::from),
        }
    }
}

/// Response for `GET /api/v1/points/stats`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsResponseBody {
    pub stats: StatsBody,
}
