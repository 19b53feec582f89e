//! Leaderboard read service: rankings, profiles, claim history, and stats.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageInfo, PageRequest};
use tracing::warn;
use uuid::Uuid;

use crate::domain::port_errors::{map_ledger_error, map_user_error};
use crate::domain::ports::{ClaimLedger, LeaderboardQuery, UserRepository};
use crate::domain::{
    ClaimHistoryEntry, Error, HistoryPage, HistoryScope, LEADERBOARD_CAP, LeaderboardEntry,
    LeaderboardStats, PointClaim, TopUser, UserId, UserProfile, rank_users,
};

const UNKNOWN_USER_NAME: &str = "Unknown user";

/// Domain service implementing [`LeaderboardQuery`].
#[derive(Clone)]
pub struct LeaderboardService<U, L> {
    users: Arc<U>,
    ledger: Arc<L>,
}

impl<U, L> LeaderboardService<U, L> {
    /// Create a new service over the given store and ledger.
    pub fn new(users: Arc<U>, ledger: Arc<L>) -> Self {
        Self { users, ledger }
    }
}

impl<U, L> LeaderboardService<U, L>
where
    U: UserRepository,
    L: ClaimLedger,
{
    async fn resolve_names(&self, claims: &[PointClaim]) -> Result<HashMap<Uuid, String>, Error> {
        let mut ids: Vec<UserId> = claims
            .iter()
            .flat_map(|claim| [claim.target.clone(), claim.claimed_by.clone()])
            .collect();
        ids.sort_by(|a, b| a.as_uuid().cmp(b.as_uuid()));
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = self
            .users
            .find_by_ids(&ids)
            .await
            .map_err(map_user_error)?;
        Ok(users
            .into_iter()
            .map(|user| (*user.id().as_uuid(), user.display_name().to_string()))
            .collect())
    }
}

fn name_for(names: &HashMap<Uuid, String>, id: &UserId) -> String {
    names.get(id.as_uuid()).cloned().unwrap_or_else(|| {
        warn!(user_id = %id, "claim references a user missing from the store");
        UNKNOWN_USER_NAME.to_owned()
    })
}

#[async_trait]
impl<U, L> LeaderboardQuery for LeaderboardService<U, L>
where
    U: UserRepository,
    L: ClaimLedger,
{
    async fn list_users(&self) -> Result<Vec<LeaderboardEntry>, Error> {
        let users = self
            .users
            .list_ranked(LEADERBOARD_CAP)
            .await
            .map_err(map_user_error)?;
        Ok(rank_users(users))
    }

    async fn get_user(&self, id: &UserId) -> Result<UserProfile, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_error)?
            .map(|user| UserProfile::from(&user))
            .ok_or_else(|| Error::not_found("User not found"))
    }

    async fn history(
        &self,
        scope: &HistoryScope,
        page: PageRequest,
    ) -> Result<HistoryPage, Error> {
        let total = self.ledger.count(scope).await.map_err(map_ledger_error)?;
        let claims = self
            .ledger
            .list(scope, page.offset(), page.limit())
            .await
            .map_err(map_ledger_error)?;
        let names = self.resolve_names(&claims).await?;

        let entries: Vec<ClaimHistoryEntry> = claims
            .into_iter()
            .map(|claim| ClaimHistoryEntry {
                user_name: name_for(&names, &claim.target),
                claimed_by: name_for(&names, &claim.claimed_by),
                id: claim.id,
                points: claim.points,
                timestamp: claim.created_at,
                description: claim.description,
            })
            .collect();
        let pagination = PageInfo::new(page, entries.len(), total);

        Ok(HistoryPage {
            entries,
            pagination,
        })
    }

    async fn stats(&self) -> Result<LeaderboardStats, Error> {
        let total_users = self.users.count_active().await.map_err(map_user_error)?;
        let total_claims = self
            .ledger
            .count(&HistoryScope::All)
            .await
            .map_err(map_ledger_error)?;
        let total_points_awarded = self.ledger.total_points().await.map_err(map_ledger_error)?;
        let top_user = rank_users(self.users.list_ranked(1).await.map_err(map_user_error)?)
            .into_iter()
            .next()
            .map(|entry| TopUser {
                id: entry.id,
                name: entry.name,
                points: entry.points,
            });

        Ok(LeaderboardStats {
            total_users,
            total_claims,
            total_points_awarded,
            top_user,
        })
    }
}

#[cfg(test)]
#[path = "leaderboard_service_tests.rs"]
mod tests;
