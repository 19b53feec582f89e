//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed user store and claim ledger using
//!   Diesel ORM
//! - **memory**: in-process user store and claim ledger for development
//!   mode and tests
//! - **security**: Argon2id credential hashing
//! - **random_points**: `rand`-backed award draws
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod memory;
pub mod persistence;
pub mod random_points;
pub mod security;
