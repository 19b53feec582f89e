//! Leaderboard entry-point: loads settings, prepares storage, and serves the
//! REST API.

mod server;

use std::io;

use actix_web::cookie::SameSite;
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use leaderboard::inbound::http::health::HealthState;
use leaderboard::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use leaderboard::settings::ServerSettings;
use server::{ServerConfig, create_server, load_session_key};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let allow_ephemeral = settings
        .allow_ephemeral_session_key()
        .map_err(io::Error::other)?;
    let cookie_secure = settings.cookie_secure().map_err(io::Error::other)?;
    let key = load_session_key(&settings.session_key_file(), allow_ephemeral)?;

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr);
    match settings.database_url() {
        Some(url) => {
            config = config.with_db_pool(prepare_database(url, &settings).await?);
        }
        None => {
            warn!("no database URL configured; users and claims are kept in memory");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting leaderboard server");
    create_server(health_state, config)?.await
}

/// Apply pending migrations, then open the async connection pool.
async fn prepare_database(url: &str, settings: &ServerSettings) -> io::Result<DbPool> {
    let migration_url = url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(io::Error::other)?
        .map_err(io::Error::other)?;
    info!(applied, "database migrations complete");

    let pool_size = settings.db_pool_size().map_err(io::Error::other)?;
    let pool_config = PoolConfig::new(url, pool_size);
    info!(database = %pool_config.redacted_url(), pool_size, "opening database pool");
    DbPool::new(pool_config)
        .await
        .map_err(io::Error::other)
}
