//! Account and session handlers.
//!
//! ```text
//! POST /api/v1/auth/register {"name":"Ada","email":"ada@example.com","password":"pw"}
//! POST /api/v1/auth/login {"email":"ada@example.com","password":"pw"}
//! POST /api/v1/auth/logout
//! GET /api/v1/auth/me
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{LoginCredentials, NewAccount};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_actor;
use crate::inbound::http::leaderboard_dto::{
    AccountCreatedBody, LoginRequest, RegisterRequest, UserProfileBody, UserResponseBody,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{map_login_validation_error, map_registration_error};

pub(crate) fn parse_registration(payload: &RegisterRequest) -> ApiResult<NewAccount> {
    NewAccount::try_from_parts(
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.password.as_deref(),
    )
    .map_err(map_registration_error)
}

/// Register a new account and log it in.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AccountCreatedBody,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email or name already taken", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let account = parse_registration(&payload)?;
    let profile = state.registration.register(&account).await?;
    session.persist_user(&profile.id)?;
    Ok(HttpResponse::Created().json(AccountCreatedBody {
        message: "User registered successfully".to_owned(),
        user: profile.into(),
    }))
}

/// Authenticate with email and password and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserResponseBody,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<UserResponseBody>> {
    let credentials = LoginCredentials::try_from_parts(
        payload.email.as_deref().unwrap_or_default(),
        payload.password.as_deref().unwrap_or_default(),
    )
    .map_err(map_login_validation_error)?;
    let user_id = state.login.authenticate(&credentials).await?;
    let profile = state.leaderboard.get_user(&user_id).await?;
    session.persist_user(&user_id)?;
    Ok(web::Json(UserResponseBody {
        user: UserProfileBody::from(profile),
    }))
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/auth/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

/// Profile of the logged-in user.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserResponseBody),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "currentUser",
    security(("SessionCookie" = []))
)]
#[get("/auth/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<UserResponseBody>> {
    let actor = require_actor(&session, state.login.as_ref()).await?;
    let profile = state.leaderboard.get_user(actor.id()).await?;
    Ok(web::Json(UserResponseBody {
        user: profile.into(),
    }))
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
