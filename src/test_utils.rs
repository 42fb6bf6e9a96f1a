//! Fixtures shared by unit tests, integration tests, benches and fuzz targets.
//! Compiled only with the `test-utils` feature.

use crate::subject::Principal;
use crate::types::Role;

/// Installs a `tracing` subscriber that writes through the test harness.
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// One principal per role, ids `"<role>-1"`.
pub fn principal_per_role() -> Vec<Principal> {
    Role::ALL
        .into_iter()
        .map(|role| Principal::with_role(format!("{role}-1"), role))
        .collect()
}

/// A principal whose role tag is not in any table.
pub fn unknown_principal(id: &str) -> Principal {
    Principal::new(id, "nonexistent")
}
