//! Port for password hashing.
//!
//! Hashing is CPU-bound and synchronous; services move each call onto
//! Tokio's blocking pool.

use crate::domain::HashedPassword;

use super::port_error;

port_error! {
    /// Errors raised by credential hashers.
    pub enum CredentialHasherError {
        /// Hashing the plaintext failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Hashes and verifies passwords.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Produce a salted hash of `password`.
    fn hash(&self, password: &str) -> Result<HashedPassword, CredentialHasherError>;

    /// Whether `password` matches `hash`.
    fn verify(&self, password: &str, hash: &HashedPassword) -> Result<bool, CredentialHasherError>;
}
