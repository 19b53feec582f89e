//! Driving port for login and session identity resolution.
//!
//! Inbound adapters call it to authenticate credentials and to turn a session
//! user id back into an [`Actor`] without importing persistence concerns.

use async_trait::async_trait;

use crate::domain::{Actor, Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    ///
    /// Unknown emails, inactive accounts, and wrong passwords all yield the
    /// same unauthorized error.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;

    /// Resolve a session user id to an actor. Returns `None` when the user no
    /// longer exists or is inactive.
    async fn resolve_actor(&self, user_id: &UserId) -> Result<Option<Actor>, Error>;
}
