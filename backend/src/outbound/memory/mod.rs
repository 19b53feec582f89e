//! In-process adapters for the user store and claim ledger.
//!
//! Used when no database is configured and by the HTTP integration tests.
//! State lives behind a `std::sync::Mutex`; every port call takes the lock
//! once, so the increment is atomic with respect to concurrent claims.

mod claim_ledger;
mod user_store;

pub use claim_ledger::InMemoryClaimLedger;
pub use user_store::InMemoryUserRepository;

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
