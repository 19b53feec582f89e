//! Points API handlers.
//!
//! ```text
//! POST /api/v1/points/claim {"userId":"3fa85f64-5717-4562-b3fc-2c963f66afa6"}
//! GET /api/v1/points/history?page=1&limit=50
//! GET /api/v1/points/history/{userId}?page=1&limit=20
//! GET /api/v1/points/stats
//! ```

use actix_web::{get, post, web};

use crate::domain::HistoryScope;
use crate::domain::ports::ClaimPointsRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_actor;
use crate::inbound::http::leaderboard_dto::{
    ClaimRequest, ClaimResponseBody, HistoryEntryBody, HistoryQuery, HistoryResponseBody,
    StatsResponseBody,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_page_request, parse_user_id};

/// Award 1 to 10 random points to a user.
#[utoipa::path(
    post,
    path = "/api/v1/points/claim",
    request_body = ClaimRequest,
    responses(
        (status = 200, description = "Points claimed", body = ClaimResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Target user not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["points"],
    operation_id = "claimPoints",
    security(("SessionCookie" = []))
)]
#[post("/points/claim")]
pub async fn claim_points(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ClaimRequest>,
) -> ApiResult<web::Json<ClaimResponseBody>> {
    let actor = require_actor(&session, state.login.as_ref()).await?;
    let target = parse_user_id(payload.user_id.as_deref(), FieldName::new("userId"))?;
    let receipt = state
        .points
        .claim_points(&ClaimPointsRequest {
            actor: Some(actor),
            target,
        })
        .await?;
    Ok(web::Json(receipt.into()))
}

async fn history_page(
    state: &HttpState,
    scope: HistoryScope,
    query: &HistoryQuery,
) -> ApiResult<HistoryResponseBody> {
    let page = parse_page_request(
        query.page.as_deref(),
        query.limit.as_deref(),
        scope.default_limit(),
    )?;
    let found = state.leaderboard.history(&scope, page).await?;
    Ok(HistoryResponseBody {
        history: found
            .entries
            .into_iter()
            .map(HistoryEntryBody::from)
            .collect(),
        pagination: found.pagination.into(),
    })
}

/// Newest-first history of every claim.
#[utoipa::path(
    get,
    path = "/api/v1/points/history",
    params(
        ("page" = Option<u32>, Query, description = "1-based page number, default 1"),
        ("limit" = Option<u32>, Query, description = "Page size, default 50, at most 100")
    ),
    responses(
        (status = 200, description = "Claim history", body = HistoryResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["points"],
    operation_id = "listHistory",
    security([])
)]
#[get("/points/history")]
pub async fn history(
    state: web::Data<HttpState>,
    query: web::Query<HistoryQuery>,
) -> ApiResult<web::Json<HistoryResponseBody>> {
    history_page(&state, HistoryScope::All, &query)
        .await
        .map(web::Json)
}

/// Newest-first history of claims targeting one user.
#[utoipa::path(
    get,
    path = "/api/v1/points/history/{userId}",
    params(
        ("userId" = String, Path, description = "Target user identifier (UUID)"),
        ("page" = Option<u32>, Query, description = "1-based page number, default 1"),
        ("limit" = Option<u32>, Query, description = "Page size, default 20, at most 100")
    ),
    responses(
        (status = 200, description = "Claim history", body = HistoryResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["points"],
    operation_id = "listUserHistory",
    security([])
)]
#[get("/points/history/{user_id}")]
pub async fn user_history(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<HistoryQuery>,
) -> ApiResult<web::Json<HistoryResponseBody>> {
    let user_id = parse_user_id(Some(path.as_str()), FieldName::new("userId"))?;
    history_page(&state, HistoryScope::Target(user_id), &query)
        .await
        .map(web::Json)
}

/// Totals across users and claims.
#[utoipa::path(
    get,
    path = "/api/v1/points/stats",
    responses(
        (status = 200, description = "Leaderboard stats", body = StatsResponseBody),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["points"],
    operation_id = "getStats",
    security([])
)]
#[get("/points/stats")]
pub async fn stats(state: web::Data<HttpState>) -> ApiResult<web::Json<StatsResponseBody>> {
    let totals = state.leaderboard.stats().await?;
    Ok(web::Json(StatsResponseBody {
        stats: totals.into(),
    }))
}

#[cfg(test)]
#[path = "points_tests.rs"]
mod tests;
