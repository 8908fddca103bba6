//! Configuration resolution from environment variables.
//!
//! Responsibilities:
//! - Provide the baseline configuration (`defaults`).
//! - Load `ETCD_*` variables, directly or through their `_FILE` siblings.
//! - Validate and apply them to a `Config` (`apply`, `apply_from`, `apply_in_place`).
//! - Optionally load a `.env` file first (`load_dotenv`).
//!
//! Does NOT handle:
//! - Connecting to etcd. The resulting `Config` is handed to the client.
//! - Re-reading the environment after resolution.
//!
//! Invariants / Assumptions:
//! - Resolution reads the environment once, synchronously, and never mutates it.
//! - Errors are returned, never logged or retried.

mod defaults;
mod dotenv;
mod env;
mod error;
mod pem;
mod resolver;

#[cfg(test)]
mod tests;

pub use defaults::defaults;
pub use dotenv::load_dotenv;
pub use env::{EnvSource, ProcessEnv, SettingSource, Settings, load_settings};
pub use error::{ConfigError, KeyPairError};
pub use pem::{parse_client_certificate, parse_root_store};
pub use resolver::{apply, apply_from, apply_in_place, get, parse_bool};
