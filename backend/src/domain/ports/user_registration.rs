//! Driving port for account creation.

use async_trait::async_trait;

use crate::domain::{Error, NewAccount, UserProfile};

/// Domain use-case port for registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Create an active account with zero points.
    ///
    /// A taken email yields a conflict reading "Email already registered";
    /// otherwise a taken name yields "Username already taken".
    async fn register(&self, account: &NewAccount) -> Result<UserProfile, Error>;
}
