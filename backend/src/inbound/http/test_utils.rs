//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};

use crate::domain::ports::{CredentialHasher, CredentialHasherError, FixedPointsSource};
use crate::domain::test_fixtures::fixture_clock;
use crate::domain::{
    AccountService, ClaimPoints, HashedPassword, LeaderboardService, PointsService,
};
use crate::inbound::http::leaderboard_dto::{LoginRequest, RegisterRequest};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::{accounts, points, users};
use crate::outbound::memory::{InMemoryClaimLedger, InMemoryUserRepository};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Reversible hasher so handler tests skip Argon2's cost.
pub struct PlainTextHasher;

impl CredentialHasher for PlainTextHasher {
    fn hash(&self, password: &str) -> Result<HashedPassword, CredentialHasherError> {
        Ok(HashedPassword::new(format!("plain:{password}")))
    }

    fn verify(&self, password: &str, hash: &HashedPassword) -> Result<bool, CredentialHasherError> {
        Ok(hash.as_str() == format!("plain:{password}"))
    }
}

/// State wired to the in-memory adapters, awarding `award` points per claim.
pub fn memory_state(award: u8) -> HttpState {
    let users = Arc::new(InMemoryUserRepository::new());
    let ledger = Arc::new(InMemoryClaimLedger::new());
    let clock = Arc::new(fixture_clock());
    let accounts = Arc::new(AccountService::new(
        users.clone(),
        Arc::new(PlainTextHasher),
        clock.clone(),
    ));
    HttpState::new(HttpStatePorts {
        login: accounts.clone(),
        registration: accounts,
        points: Arc::new(PointsService::new(
            users.clone(),
            ledger.clone(),
            Arc::new(FixedPointsSource(
                ClaimPoints::new(award).unwrap_or(ClaimPoints::MIN),
            )),
            clock,
        )),
        leaderboard: Arc::new(LeaderboardService::new(users, ledger)),
    })
}

/// App exposing every `/api/v1` handler over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(
            web::scope("/api/v1")
                .service(accounts::register)
                .service(accounts::login)
                .service(accounts::logout)
                .service(accounts::current_user)
                .service(users::list_users)
                .service(users::get_user)
                .service(users::create_user)
                .service(points::claim_points)
                .service(points::history)
                .service(points::user_history)
                .service(points::stats),
        )
}

pub fn register_body(name: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        name: Some(name.to_owned()),
        email: Some(email.to_owned()),
        password: Some("hunter22".to_owned()),
    }
}

pub fn login_body(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: Some(email.to_owned()),
        password: Some(password.to_owned()),
    }
}

/// Register through the public endpoint and return the session cookie and
/// the new user's id.
pub async fn register_user(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    name: &str,
    email: &str,
) -> (Cookie<'static>, String) {
    let res = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body(name, email))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), actix_web::http::StatusCode::CREATED);
    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .expect("session cookie")
        .into_owned();
    let body: serde_json::Value = actix_test::read_body_json(res).await;
    let id = body["user"]["id"].as_str().expect("user id").to_owned();
    (cookie, id)
}
