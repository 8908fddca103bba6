//! Baseline configuration values.
//!
//! Invariants:
//! - Dial timeout is 15 seconds, auto-sync interval is 5 minutes.
//! - No endpoints, credentials or TLS settings are set.

use crate::types::Config;

/// The defaults used by this library.
///
/// Modify the returned value and pass it to [`apply`](crate::apply) to
/// layer the environment on top of custom defaults.
pub fn defaults() -> Config {
    Config::default()
}
