//! `ClaimLedger` backed by a locked vector.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{ClaimLedger, ClaimLedgerError};
use crate::domain::{HistoryScope, PointClaim};

use super::lock;

/// In-memory implementation of the [`ClaimLedger`] port.
///
/// Does not check that referenced users exist; the points service looks the
/// target up before appending.
#[derive(Debug, Default)]
pub struct InMemoryClaimLedger {
    claims: Mutex<Vec<PointClaim>>,
}

impl InMemoryClaimLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

fn in_scope(scope: &HistoryScope, claim: &PointClaim) -> bool {
    match scope {
        HistoryScope::All => true,
        HistoryScope::Target(user_id) => &claim.target == user_id,
    }
}

#[async_trait]
impl ClaimLedger for InMemoryClaimLedger {
    async fn append(&self, claim: &PointClaim) -> Result<(), ClaimLedgerError> {
        lock(&self.claims).push(claim.clone());
        Ok(())
    }

    async fn list(
        &self,
        scope: &HistoryScope,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<PointClaim>, ClaimLedgerError> {
        let mut matching: Vec<PointClaim> = lock(&self.claims)
            .iter()
            .filter(|claim| in_scope(scope, claim))
            .cloned()
            .collect();
        matching.sort_by(|left, right| {
            right
                .created_at
                .cmp(&left.created_at)
                .then_with(|| right.id.as_uuid().cmp(left.id.as_uuid()))
        });

        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matching.into_iter().skip(skip).take(take).collect())
    }

    async fn count(&self, scope: &HistoryScope) -> Result<u64, ClaimLedgerError> {
        let count = lock(&self.claims)
            .iter()
            .filter(|claim| in_scope(scope, claim))
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn total_points(&self) -> Result<u64, ClaimLedgerError> {
        Ok(lock(&self.claims)
            .iter()
            .map(|claim| u64::from(claim.points.value()))
            .sum())
    }
}
