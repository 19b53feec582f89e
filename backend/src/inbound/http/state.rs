//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LeaderboardQuery, LoginService, PointsCommand, UserRegistration};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn UserRegistration>,
    pub points: Arc<dyn PointsCommand>,
    pub leaderboard: Arc<dyn LeaderboardQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn UserRegistration>,
    pub points: Arc<dyn PointsCommand>,
    pub leaderboard: Arc<dyn LeaderboardQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use leaderboard::domain::ports::FixedPointsSource;
    /// use leaderboard::domain::{AccountService, ClaimPoints, LeaderboardService, PointsService};
    /// use leaderboard::inbound::http::state::{HttpState, HttpStatePorts};
    /// use leaderboard::outbound::memory::{InMemoryClaimLedger, InMemoryUserRepository};
    /// use leaderboard::outbound::security::Argon2CredentialHasher;
    /// use mockable::DefaultClock;
    ///
    /// let users = Arc::new(InMemoryUserRepository::new());
    /// let ledger = Arc::new(InMemoryClaimLedger::new());
    /// let accounts = Arc::new(AccountService::new(
    ///     users.clone(),
    ///     Arc::new(Argon2CredentialHasher::new()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     login: accounts.clone(),
    ///     registration: accounts,
    ///     points: Arc::new(PointsService::new(
    ///         users.clone(),
    ///         ledger.clone(),
    ///         Arc::new(FixedPointsSource(ClaimPoints::MAX)),
    ///         Arc::new(DefaultClock),
    ///     )),
    ///     leaderboard: Arc::new(LeaderboardService::new(users, ledger)),
    /// });
    /// let _login = state.login.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            registration,
            points,
            leaderboard,
        } = ports;
        Self {
            login,
            registration,
            points,
            leaderboard,
        }
    }
}
