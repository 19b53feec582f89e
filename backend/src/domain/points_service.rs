//! Points claiming service.
//!
//! A claim draws an award, appends it to the ledger, then increments the
//! target's total. The two writes are separately atomic; if the increment
//! fails after the append succeeded the failure is logged with both ids and
//! reported as an internal error without compensation.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info};

use crate::domain::port_errors::{map_ledger_error, map_user_error};
use crate::domain::ports::{ClaimLedger, ClaimPointsRequest, PointsCommand, PointsSource, UserRepository};
use crate::domain::{ClaimReceipt, Error, PointClaim};

/// Domain service implementing [`PointsCommand`].
#[derive(Clone)]
pub struct PointsService<U, L> {
    users: Arc<U>,
    ledger: Arc<L>,
    points: Arc<dyn PointsSource>,
    clock: Arc<dyn Clock>,
}

impl<U, L> PointsService<U, L> {
    /// Create a new service over the given store, ledger, award source, and
    /// clock.
    pub fn new(
        users: Arc<U>,
        ledger: Arc<L>,
        points: Arc<dyn PointsSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            ledger,
            points,
            clock,
        }
    }
}

#[async_trait]
impl<U, L> PointsCommand for PointsService<U, L>
where
    U: UserRepository,
    L: ClaimLedger,
{
    async fn claim_points(&self, request: &ClaimPointsRequest) -> Result<ClaimReceipt, Error> {
        let actor = request
            .actor
            .as_ref()
            .ok_or_else(|| Error::unauthorized("login required"))?;

        let target = self
            .users
            .find_by_id(&request.target)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found("User not found"))?;

        let points = self.points.draw();
        let claim = PointClaim::record(actor, target.id().clone(), points, self.clock.utc());
        self.ledger.append(&claim).await.map_err(map_ledger_error)?;

        let updated = match self.users.increment_points(target.id(), points).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                error!(
                    claim_id = %claim.id,
                    target_id = %target.id(),
                    "claim recorded but target vanished before increment"
                );
                return Err(Error::internal("claim recorded but balance not updated"));
            }
            Err(err) => {
                error!(
                    claim_id = %claim.id,
                    target_id = %target.id(),
                    error = %err,
                    "claim recorded but increment failed"
                );
                return Err(Error::internal("claim recorded but balance not updated"));
            }
        };

        info!(
            claim_id = %claim.id,
            target_id = %updated.id(),
            actor_id = %actor.id(),
            points = points.value(),
            "points claimed"
        );

        Ok(ClaimReceipt {
            claim_id: claim.id,
            points,
            target_id: updated.id().clone(),
            target_name: updated.display_name().clone(),
            actor_name: actor.name().clone(),
            timestamp: claim.created_at,
            new_total: updated.total_points(),
        })
    }
}

#[cfg(test)]
#[path = "points_service_tests.rs"]
mod tests;
