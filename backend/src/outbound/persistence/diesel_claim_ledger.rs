//! PostgreSQL-backed `ClaimLedger` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ClaimLedger, ClaimLedgerError};
use crate::domain::{ClaimId, ClaimPoints, HistoryScope, PointClaim, UserId};

use super::diesel_basic_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, violated_constraint,
};
use super::models::{NewPointClaimRow, PointClaimRow};
use super::pool::{DbPool, PoolError};
use super::schema::point_claims;

/// Diesel-backed implementation of the [`ClaimLedger`] port.
#[derive(Clone)]
pub struct DieselClaimLedger {
    pool: DbPool,
}

impl DieselClaimLedger {
    /// Create a new ledger with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ClaimLedgerError {
    map_basic_pool_error(error, ClaimLedgerError::connection)
}

fn map_diesel_error(error: DieselError) -> ClaimLedgerError {
    map_basic_diesel_error(error, ClaimLedgerError::query, ClaimLedgerError::connection)
}

fn map_append_error(error: DieselError, claim: &PointClaim) -> ClaimLedgerError {
    if violated_constraint(&error, DatabaseErrorKind::ForeignKeyViolation).is_some() {
        return ClaimLedgerError::unknown_user(claim.target.to_string());
    }
    map_diesel_error(error)
}

fn row_to_claim(row: PointClaimRow) -> Result<PointClaim, ClaimLedgerError> {
    let points = ClaimPoints::try_from(row.points)
        .map_err(|err| ClaimLedgerError::query(format!("stored claim invalid: {err}")))?;
    Ok(PointClaim {
        id: ClaimId::from_uuid(row.id),
        target: UserId::from_uuid(row.user_id),
        claimed_by: UserId::from_uuid(row.claimed_by),
        points,
        description: row.description,
        created_at: row.created_at,
    })
}

fn scoped(scope: &HistoryScope) -> point_claims::BoxedQuery<'static, Pg> {
    let query = point_claims::table.into_boxed();
    match scope {
        HistoryScope::All => query,
        HistoryScope::Target(user_id) => query.filter(point_claims::user_id.eq(*user_id.as_uuid())),
    }
}

#[async_trait]
impl ClaimLedger for DieselClaimLedger {
    async fn append(&self, claim: &PointClaim) -> Result<(), ClaimLedgerError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewPointClaimRow {
            id: *claim.id.as_uuid(),
            user_id: *claim.target.as_uuid(),
            claimed_by: *claim.claimed_by.as_uuid(),
            points: i16::from(claim.points),
            description: claim.description.as_str(),
            created_at: claim.created_at,
        };

        diesel::insert_into(point_claims::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_append_error(err, claim))
    }

    async fn list(
        &self,
        scope: &HistoryScope,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<PointClaim>, ClaimLedgerError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let offset = i64::try_from(offset)
            .map_err(|_| ClaimLedgerError::query("history offset exceeds storage range"))?;

        let rows: Vec<PointClaimRow> = scoped(scope)
            .order((point_claims::created_at.desc(), point_claims::id.desc()))
            .offset(offset)
            .limit(i64::from(limit))
            .select(PointClaimRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_claim).collect()
    }

    async fn count(&self, scope: &HistoryScope) -> Result<u64, ClaimLedgerError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = scoped(scope)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(count).map_err(|_| ClaimLedgerError::query("negative claim count"))
    }

    async fn total_points(&self) -> Result<u64, ClaimLedgerError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: Option<i64> = point_claims::table
            .select(diesel::dsl::sum(point_claims::points))
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(total.unwrap_or(0))
            .map_err(|_| ClaimLedgerError::query("negative point total"))
    }
}
