//! Opt-in policy for suites that need an embedded PostgreSQL cluster.
//!
//! The cluster downloads PostgreSQL binaries on first use, so these suites run
//! only when `RUN_PG_EMBEDDED` is truthy. Once opted in, setup failures fail
//! the test unless `SKIP_TEST_CLUSTER` is also truthy.

fn truthy(var: &str) -> bool {
    std::env::var(var)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Whether embedded PostgreSQL suites were requested.
pub fn embedded_cluster_enabled() -> bool {
    truthy("RUN_PG_EMBEDDED")
}

/// Returns true when the `SKIP_TEST_CLUSTER` environment variable is set to a
/// truthy value.
pub fn should_skip_test_cluster() -> bool {
    truthy("SKIP_TEST_CLUSTER")
}

/// Handles embedded cluster setup failures consistently across integration tests.
///
/// When `SKIP_TEST_CLUSTER` is truthy, prints a skip marker and returns `None`.
/// Otherwise, panics with a clear failure message so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
