//! Port for the append-only claim ledger.

use async_trait::async_trait;

use crate::domain::{HistoryScope, PointClaim};

use super::port_error;

port_error! {
    /// Errors raised by claim ledger adapters.
    pub enum ClaimLedgerError {
        /// Ledger connection could not be established.
        Connection { message: String } => "claim ledger connection failed: {message}",
        /// Query or append failed during execution.
        Query { message: String } => "claim ledger query failed: {message}",
        /// The claim referenced a user the store does not know.
        UnknownUser { user_id: String } => "claim references unknown user: {user_id}",
    }
}

/// Driven port recording claims and serving history slices.
///
/// Listings are ordered newest first; claims sharing a timestamp are ordered
/// by claim id, descending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClaimLedger: Send + Sync {
    /// Append a claim. Claims are never updated or removed.
    async fn append(&self, claim: &PointClaim) -> Result<(), ClaimLedgerError>;

    /// Claims in `scope`, skipping `offset` and returning at most `limit`.
    async fn list(
        &self,
        scope: &HistoryScope,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<PointClaim>, ClaimLedgerError>;

    /// Number of claims in `scope`.
    async fn count(&self, scope: &HistoryScope) -> Result<u64, ClaimLedgerError>;

    /// Sum of points across every claim.
    async fn total_points(&self) -> Result<u64, ClaimLedgerError>;
}
