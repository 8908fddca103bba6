//! Centralized constants for etcd client configuration.
//!
//! This module contains the recognized environment variable names and the
//! default timing values so they are not duplicated as magic strings/numbers.

// =============================================================================
// Timing Defaults
// =============================================================================

/// Default dial timeout in seconds.
pub const DEFAULT_DIAL_TIMEOUT_SECS: u64 = 15;

/// Default interval between cluster membership syncs in seconds (5 minutes).
pub const DEFAULT_AUTO_SYNC_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Environment Variables
// =============================================================================

/// Comma-separated list of endpoints.
pub const ENV_ENDPOINTS: &str = "ETCD_ENDPOINTS";

/// Username for authentication.
pub const ENV_USERNAME: &str = "ETCD_USERNAME";

/// Password for authentication.
pub const ENV_PASSWORD: &str = "ETCD_PASSWORD";

/// Combined `user:password` form.
pub const ENV_USERNAME_AND_PASSWORD: &str = "ETCD_USERNAME_AND_PASSWORD";

/// Disables server certificate verification when true.
pub const ENV_INSECURE_SKIP_VERIFY: &str = "ETCD_INSECURE_SKIP_VERIFY";

/// PEM encoded CA certificate(s) used to verify the server.
pub const ENV_SERVER_CA: &str = "ETCD_SERVER_CA";

/// PEM encoded client certificate.
pub const ENV_CLIENT_CERT: &str = "ETCD_CLIENT_CERT";

/// PEM encoded client private key.
pub const ENV_CLIENT_KEY: &str = "ETCD_CLIENT_KEY";

/// Suffix of the sibling variable naming a file that holds the value.
pub const FILE_SUFFIX: &str = "_FILE";

/// All recognized variables, in load order.
pub const RECOGNIZED_VARS: [&str; 8] = [
    ENV_ENDPOINTS,
    ENV_USERNAME,
    ENV_PASSWORD,
    ENV_USERNAME_AND_PASSWORD,
    ENV_INSECURE_SKIP_VERIFY,
    ENV_SERVER_CA,
    ENV_CLIENT_CERT,
    ENV_CLIENT_KEY,
];

/// Variable that disables `.env` loading when set to `true` or `1`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
