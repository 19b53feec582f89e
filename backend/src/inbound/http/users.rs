//! Users API handlers.
//!
//! ```text
//! GET /api/v1/users
//! GET /api/v1/users/{id}
//! POST /api/v1/users {"name":"Grace","email":"grace@example.com","password":"pw"}
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts::parse_registration;
use crate::inbound::http::auth::require_actor;
use crate::inbound::http::leaderboard_dto::{
    AccountCreatedBody, LeaderboardEntryBody, RegisterRequest, UserResponseBody,
    UsersResponseBody,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_user_id};

/// Ranked leaderboard of active users, at most 100 entries.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use leaderboard::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Ranked users", body = UsersResponseBody),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponseBody>> {
    let entries = state.leaderboard.list_users().await?;
    Ok(web::Json(UsersResponseBody {
        users: entries.into_iter().map(LeaderboardEntryBody::from).collect(),
    }))
}

/// Public profile of one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User profile", body = UserResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser",
    security([])
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponseBody>> {
    let id = parse_user_id(Some(path.as_str()), FieldName::new("id"))?;
    let profile = state.leaderboard.get_user(&id).await?;
    Ok(web::Json(UserResponseBody {
        user: profile.into(),
    }))
}

/// Create another user on behalf of the logged-in user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = AccountCreatedBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 409, description = "Email or name already taken", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security(("SessionCookie" = []))
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    require_actor(&session, state.login.as_ref()).await?;
    let account = parse_registration(&payload)?;
    let profile = state.registration.register(&account).await?;
    Ok(HttpResponse::Created().json(AccountCreatedBody {
        message: "User created successfully".to_owned(),
        user: profile.into(),
    }))
}
