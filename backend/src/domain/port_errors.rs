//! Translation of driven-port failures into domain errors.

use tracing::debug;

use crate::domain::Error;
use crate::domain::ports::{ClaimLedgerError, CredentialHasherError, UserPersistenceError};

/// Conflict message for a taken email.
pub const EMAIL_TAKEN: &str = "Email already registered";
/// Conflict message for a taken display name.
pub const NAME_TAKEN: &str = "Username already taken";

pub(crate) fn map_user_error(error: UserPersistenceError) -> Error {
    debug!(kind = error.kind(), %error, "user repository failure");
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { .. } => Error::conflict(EMAIL_TAKEN),
        UserPersistenceError::DuplicateDisplayName { .. } => Error::conflict(NAME_TAKEN),
    }
}

pub(crate) fn map_ledger_error(error: ClaimLedgerError) -> Error {
    debug!(kind = error.kind(), %error, "claim ledger failure");
    match error {
        ClaimLedgerError::Connection { message } => {
            Error::service_unavailable(format!("claim ledger unavailable: {message}"))
        }
        ClaimLedgerError::Query { message } => {
            Error::internal(format!("claim ledger error: {message}"))
        }
        ClaimLedgerError::UnknownUser { .. } => Error::not_found("User not found"),
    }
}

pub(crate) fn map_hasher_error(error: CredentialHasherError) -> Error {
    debug!(kind = error.kind(), %error, "credential hasher failure");
    Error::internal(error.to_string())
}
