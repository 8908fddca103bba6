//! Connection configuration for etcd clients.
//!
//! Responsibilities:
//! - Define the main `Config` structure handed to the etcd client.
//! - Provide the baseline `Default` (dial timeout and auto-sync interval).
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network connections.
//!
//! Invariants:
//! - Default values come from `constants`, not magic numbers.
//! - `tls` stays `None` until some TLS setting is written through `tls_mut`.

use crate::constants::{DEFAULT_AUTO_SYNC_INTERVAL_SECS, DEFAULT_DIAL_TIMEOUT_SECS};
use crate::types::tls::TlsConfig;
use secrecy::SecretString;
use std::time::Duration;

/// Client configuration for connecting to an etcd cluster.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint addresses, in the order they should be tried.
    pub endpoints: Vec<String>,
    /// Username for authentication.
    pub username: Option<String>,
    /// Password for authentication.
    pub password: Option<SecretString>,
    /// TLS settings. `None` means the client connects in plaintext.
    pub tls: Option<TlsConfig>,
    /// Maximum time allowed for establishing a connection.
    pub dial_timeout: Duration,
    /// How often the client refreshes its view of cluster membership.
    pub auto_sync_interval: Duration,
}

impl Default for Config {
    /// Baseline configuration: 15s dial timeout, 5min auto-sync, nothing else set.
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            username: None,
            password: None,
            tls: None,
            dial_timeout: Duration::from_secs(DEFAULT_DIAL_TIMEOUT_SECS),
            auto_sync_interval: Duration::from_secs(DEFAULT_AUTO_SYNC_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Returns the TLS sub-configuration, allocating an empty one on first use.
    pub fn tls_mut(&mut self) -> &mut TlsConfig {
        self.tls.get_or_insert_with(TlsConfig::default)
    }

    /// Whether any TLS setting is present.
    pub fn has_tls(&self) -> bool {
        self.tls.is_some()
    }

    /// Whether both a username and a password are set.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}
