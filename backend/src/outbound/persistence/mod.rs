//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the user store and claim ledger ports backed
//! by PostgreSQL via `diesel-async` and a `bb8` pool.
//!
//! - Repository implementations only translate between Diesel rows and domain
//!   types.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Database errors map to the typed port errors; unique and foreign-key
//!   violations are recognised by constraint.
//!
//! # Example
//!
//! ```ignore
//! use leaderboard::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/leaderboard", 4)).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_claim_ledger;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_claim_ledger::DieselClaimLedger;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
