//! Database provisioning for embedded PostgreSQL suites.
//!
//! Databases are recreated with `postgres` so `DROP DATABASE` runs outside any
//! Diesel transaction, then migrated with the embedded migrations the server
//! applies at startup.

use leaderboard::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

use super::format_postgres_error;

/// Drop and recreate `name`, returning its connection URL.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(cluster.connection().database_url(name))
}

/// Apply every embedded migration, failing when none were pending.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    match run_pending_migrations(url).map_err(|err| err.to_string())? {
        0 => Err("expected a fresh database with pending migrations".to_owned()),
        _ => Ok(()),
    }
}
