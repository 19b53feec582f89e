//! Driving port for claiming points.

use async_trait::async_trait;

use crate::domain::{Actor, ClaimReceipt, Error, UserId};

/// Request to award points to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimPointsRequest {
    /// Resolved identity of the caller, `None` when unauthenticated.
    pub actor: Option<Actor>,
    /// User receiving the points.
    pub target: UserId,
}

/// Domain use-case port for point claims.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointsCommand: Send + Sync {
    /// Draw an award, record it in the ledger, and credit the target.
    async fn claim_points(&self, request: &ClaimPointsRequest) -> Result<ClaimReceipt, Error>;
}
