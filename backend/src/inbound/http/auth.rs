//! Authentication helpers used by HTTP handlers.
//!
//! Keep the HTTP modules focused on request/response mapping by concentrating
//! session-to-actor resolution here.

use crate::domain::ports::LoginService;
use crate::domain::{Actor, Error};

use super::ApiResult;
use super::session::SessionContext;

/// Resolve the session's user to an actor, or `None` when the session is
/// anonymous or points at an inactive or deleted user.
pub(crate) async fn current_actor(
    session: &SessionContext,
    login: &dyn LoginService,
) -> ApiResult<Option<Actor>> {
    match session.user_id()? {
        Some(user_id) => login.resolve_actor(&user_id).await,
        None => Ok(None),
    }
}

/// Resolve the session's actor or fail with `401 Unauthorized`.
pub(crate) async fn require_actor(
    session: &SessionContext,
    login: &dyn LoginService,
) -> ApiResult<Actor> {
    current_actor(session, login)
        .await?
        .ok_or_else(|| Error::unauthorized("login required"))
}
