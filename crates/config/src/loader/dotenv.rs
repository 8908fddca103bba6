//! Optional `.env` loading ahead of environment resolution.
//!
//! Invariants:
//! - `DOTENV_DISABLED=true|1` skips loading entirely.
//! - A missing `.env` file is not an error.
//! - Existing process variables are never overridden.

use crate::constants::ENV_DOTENV_DISABLED;

use super::error::ConfigError;

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Load environment variables from a `.env` file in the current directory or
/// its parents, if present.
///
/// Call this before [`get`](crate::get) or [`apply`](crate::apply) so that
/// `ETCD_*` variables from the file take part in resolution.
///
/// # Errors
///
/// - `ConfigError::DotenvParse` if the `.env` file has invalid syntax.
/// - `ConfigError::DotenvIo` if it exists but cannot be read.
///
/// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env file");
            Ok(())
        }
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}
