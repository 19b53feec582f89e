//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api/v1` handler, the health probes, the
//! request/response bodies from [`crate::inbound::http::leaderboard_dto`], and
//! the error schemas. Domain types stay free of `ToSchema`.
//!
//! The document backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use crate::inbound::http::leaderboard_dto::{
    AccountCreatedBody, ClaimBody, ClaimRequest, ClaimResponseBody, HistoryEntryBody,
    HistoryResponseBody, LeaderboardEntryBody, LoginRequest, PaginationBody, RegisterRequest,
    StatsBody, StatsResponseBody, TopUserBody, UserProfileBody, UserResponseBody,
    UserSummaryBody, UsersResponseBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/auth/login or /api/v1/auth/register.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Leaderboard API",
        description = "Register users, claim random points, and browse rankings and claim history."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::accounts::current_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::points::claim_points,
        crate::inbound::http::points::history,
        crate::inbound::http::points::user_history,
        crate::inbound::http::points::stats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        RegisterRequest,
        ClaimRequest,
        LeaderboardEntryBody,
        UsersResponseBody,
        UserProfileBody,
        UserResponseBody,
        UserSummaryBody,
        AccountCreatedBody,
        ClaimBody,
        ClaimResponseBody,
        HistoryEntryBody,
        PaginationBody,
        HistoryResponseBody,
        TopUserBody,
        StatsBody,
        StatsResponseBody,
    )),
    tags(
        (name = "auth", description = "Registration and session management"),
        (name = "users", description = "Leaderboard rankings and user profiles"),
        (name = "points", description = "Point claims, history, and stats"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
