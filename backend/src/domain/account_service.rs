//! Account service: registration, login, and session actor resolution.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::domain::port_errors::{EMAIL_TAKEN, NAME_TAKEN, map_hasher_error, map_user_error};
use crate::domain::ports::{
    CredentialHasher, CredentialHasherError, LoginService, UserRegistration, UserRepository,
};
use crate::domain::{Actor, Error, LoginCredentials, NewAccount, User, UserId, UserProfile};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Run a hasher call on Tokio's blocking pool so Argon2 never stalls the
/// request workers.
async fn run_hasher<T, F>(hasher: &Arc<dyn CredentialHasher>, work: F) -> Result<T, Error>
where
    T: Send + 'static,
    F: FnOnce(&dyn CredentialHasher) -> Result<T, CredentialHasherError> + Send + 'static,
{
    let hasher = Arc::clone(hasher);
    tokio::task::spawn_blocking(move || work(hasher.as_ref()))
        .await
        .map_err(|err| Error::internal(format!("credential hasher task failed: {err}")))?
        .map_err(map_hasher_error)
}

/// Domain service implementing [`UserRegistration`] and [`LoginService`].
#[derive(Clone)]
pub struct AccountService<U> {
    users: Arc<U>,
    hasher: Arc<dyn CredentialHasher>,
    clock: Arc<dyn Clock>,
}

impl<U> AccountService<U> {
    /// Create a new service over the given store, hasher, and clock.
    pub fn new(users: Arc<U>, hasher: Arc<dyn CredentialHasher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            hasher,
            clock,
        }
    }
}

#[async_trait]
impl<U> UserRegistration for AccountService<U>
where
    U: UserRepository,
{
    async fn register(&self, account: &NewAccount) -> Result<UserProfile, Error> {
        if self
            .users
            .email_taken(account.email())
            .await
            .map_err(map_user_error)?
        {
            return Err(Error::conflict(EMAIL_TAKEN));
        }
        if self
            .users
            .display_name_taken(account.name())
            .await
            .map_err(map_user_error)?
        {
            return Err(Error::conflict(NAME_TAKEN));
        }

        let password = Zeroizing::new(account.password().to_owned());
        let password_hash = run_hasher(&self.hasher, move |hasher| hasher.hash(&password)).await?;
        let user = User::new(
            UserId::random(),
            account.name().clone(),
            account.email().clone(),
            self.clock.utc(),
        );
        // Unique constraints still guard against a concurrent registration
        // slipping past the checks above.
        self.users
            .insert(&user, &password_hash)
            .await
            .map_err(map_user_error)?;

        info!(user_id = %user.id(), "user registered");
        Ok(UserProfile::from(&user))
    }
}

#[async_trait]
impl<U> LoginService for AccountService<U>
where
    U: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let Some(stored) = self
            .users
            .find_credentials_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
        else {
            debug!("login rejected: unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        if !stored.active {
            debug!(user_id = %stored.user_id, "login rejected: inactive account");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }

        let password = Zeroizing::new(credentials.password().to_owned());
        let hash = stored.password_hash.clone();
        let matches =
            run_hasher(&self.hasher, move |hasher| hasher.verify(&password, &hash)).await?;
        if !matches {
            debug!(user_id = %stored.user_id, "login rejected: wrong password");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(stored.user_id)
    }

    async fn resolve_actor(&self, user_id: &UserId) -> Result<Option<Actor>, Error> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?;
        Ok(user.filter(User::is_active).map(|user| Actor::from(&user)))
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
