//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (user store, claim ledger, hasher, points source) are
//! implemented by outbound adapters. Driving ports (points command,
//! leaderboard query, registration, login) are implemented by domain services
//! and consumed by the HTTP adapter.

mod macros;
pub(crate) use macros::port_error;

mod claim_ledger;
mod credential_hasher;
mod leaderboard_query;
mod login_service;
mod points_command;
mod points_source;
mod user_registration;
mod user_repository;

#[cfg(test)]
pub use claim_ledger::MockClaimLedger;
pub use claim_ledger::{ClaimLedger, ClaimLedgerError};
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, CredentialHasherError};
#[cfg(test)]
pub use leaderboard_query::MockLeaderboardQuery;
pub use leaderboard_query::LeaderboardQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use points_command::MockPointsCommand;
pub use points_command::{ClaimPointsRequest, PointsCommand};
#[cfg(test)]
pub use points_source::MockPointsSource;
pub use points_source::{FixedPointsSource, PointsSource};
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
