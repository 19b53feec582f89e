//! Builders wiring storage adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use leaderboard::domain::ports::{ClaimLedger, CredentialHasher, PointsSource, UserRepository};
use leaderboard::domain::{AccountService, LeaderboardService, PointsService};
use leaderboard::inbound::http::state::{HttpState, HttpStatePorts};
use leaderboard::outbound::memory::{InMemoryClaimLedger, InMemoryUserRepository};
use leaderboard::outbound::persistence::{DbPool, DieselClaimLedger, DieselUserRepository};
use leaderboard::outbound::random_points::RandomPointsSource;
use leaderboard::outbound::security::Argon2CredentialHasher;

use super::ServerConfig;

/// Collaborators shared by every service regardless of storage backend.
pub(crate) struct ServiceDeps {
    pub(crate) hasher: Arc<dyn CredentialHasher>,
    pub(crate) points: Arc<dyn PointsSource>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServiceDeps {
    fn production() -> Self {
        Self {
            hasher: Arc::new(Argon2CredentialHasher::new()),
            points: Arc::new(RandomPointsSource::from_entropy()),
            clock: Arc::new(DefaultClock),
        }
    }
}

/// Construct every driving port over one user store and one claim ledger.
pub(crate) fn build_ports<U, L>(users: Arc<U>, ledger: Arc<L>, deps: ServiceDeps) -> HttpStatePorts
where
    U: UserRepository + 'static,
    L: ClaimLedger + 'static,
{
    let ServiceDeps {
        hasher,
        points,
        clock,
    } = deps;
    let accounts = Arc::new(AccountService::new(users.clone(), hasher, clock.clone()));
    HttpStatePorts {
        login: accounts.clone(),
        registration: accounts,
        points: Arc::new(PointsService::new(
            users.clone(),
            ledger.clone(),
            points,
            clock,
        )),
        leaderboard: Arc::new(LeaderboardService::new(users, ledger)),
    }
}

fn ports_for_pool(pool: Option<&DbPool>, deps: ServiceDeps) -> HttpStatePorts {
    match pool {
        Some(pool) => {
            info!("using PostgreSQL user store and claim ledger");
            build_ports(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselClaimLedger::new(pool.clone())),
                deps,
            )
        }
        None => {
            info!("using in-memory user store and claim ledger");
            build_ports(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryClaimLedger::new()),
                deps,
            )
        }
    }
}

/// Build the shared HTTP state, preferring PostgreSQL adapters when a pool is
/// configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(ports_for_pool(
        config.db_pool.as_ref(),
        ServiceDeps::production(),
    )))
}
