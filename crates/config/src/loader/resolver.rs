//! Applying environment settings to a client configuration.
//!
//! Responsibilities:
//! - Validate the loaded settings individually and in combination.
//! - Write endpoints, credentials and TLS material into a `Config`.
//!
//! Does NOT handle:
//! - Reading variables or `_FILE` contents (see env.rs).
//! - Checking that standalone username and password are supplied together.
//!   The client rejects an incomplete credential pair on its own.
//!
//! Invariants:
//! - `ETCD_USERNAME_AND_PASSWORD` is resolved before username/password are assigned.
//! - The TLS sub-configuration is allocated only when a TLS setting is present.
//! - A failure aborts the pass; fields written earlier in the pass stay written.

use secrecy::SecretString;

use super::defaults::defaults;
use super::env::{EnvSource, ProcessEnv, SettingSource, Settings, load_settings};
use super::error::ConfigError;
use super::pem::{parse_client_certificate, parse_root_store};
use crate::constants::{
    ENV_CLIENT_CERT, ENV_CLIENT_KEY, ENV_ENDPOINTS, ENV_INSECURE_SKIP_VERIFY, ENV_PASSWORD,
    ENV_SERVER_CA, ENV_USERNAME, ENV_USERNAME_AND_PASSWORD,
};
use crate::types::Config;

/// Build a configuration from the defaults and the process environment.
pub fn get() -> Result<Config, ConfigError> {
    apply(defaults())
}

/// Read the process environment and return a modified copy of `config`.
pub fn apply(config: Config) -> Result<Config, ConfigError> {
    apply_from(config, &ProcessEnv)
}

/// Like [`apply`], but reads variables from `env`.
pub fn apply_from(mut config: Config, env: &impl EnvSource) -> Result<Config, ConfigError> {
    apply_in_place(&mut config, env)?;
    Ok(config)
}

/// Apply the settings found in `env` to `config` in place.
///
/// On error, fields written before the failing step remain written. Such a
/// configuration must not be used to connect.
pub fn apply_in_place(config: &mut Config, env: &impl EnvSource) -> Result<(), ConfigError> {
    let mut settings = load_settings(env)?;
    if settings.is_empty() {
        tracing::debug!("no etcd settings found in environment");
    } else {
        tracing::debug!(
            vars = ?settings.names().collect::<Vec<_>>(),
            "applying etcd settings from environment"
        );
    }

    if let Some(endpoints) = settings.get(ENV_ENDPOINTS) {
        config.endpoints = endpoints.split(',').map(str::to_string).collect();
    }

    split_combined_credentials(&mut settings)?;
    if let Some(username) = settings.take(ENV_USERNAME) {
        config.username = Some(username);
    }
    if let Some(password) = settings.take(ENV_PASSWORD) {
        config.password = Some(SecretString::new(password.into()));
    }

    if let Some(value) = settings.get(ENV_INSECURE_SKIP_VERIFY) {
        let skip = parse_bool(value).ok_or_else(|| ConfigError::InvalidBool {
            var: ENV_INSECURE_SKIP_VERIFY.to_string(),
            value: value.to_string(),
        })?;
        config.tls_mut().insecure_skip_verify = skip;
    }

    if let Some(pem) = settings.get(ENV_SERVER_CA) {
        let roots = parse_root_store(pem)?;
        config.tls_mut().root_certificates = Some(roots);
    }

    match (settings.get(ENV_CLIENT_CERT), settings.get(ENV_CLIENT_KEY)) {
        (Some(cert), Some(key)) => {
            let pair = parse_client_certificate(cert, key)?;
            config.tls_mut().client_certificates = vec![pair];
        }
        (Some(_), None) | (None, Some(_)) => return Err(ConfigError::IncompleteClientKeyPair),
        (None, None) => {}
    }

    Ok(())
}

/// Replace `ETCD_USERNAME_AND_PASSWORD` with the username and password it holds.
fn split_combined_credentials(settings: &mut Settings) -> Result<(), ConfigError> {
    let Some(combined) = settings.get(ENV_USERNAME_AND_PASSWORD) else {
        return Ok(());
    };
    if settings.contains(ENV_USERNAME) || settings.contains(ENV_PASSWORD) {
        return Err(ConfigError::CredentialConflict);
    }
    let (username, password) = combined
        .split_once(':')
        .ok_or(ConfigError::MalformedCredentials)?;
    let (username, password) = (username.to_string(), password.to_string());

    let source = settings
        .source(ENV_USERNAME_AND_PASSWORD)
        .cloned()
        .unwrap_or(SettingSource::Direct);
    settings.insert(ENV_USERNAME, username, source.clone());
    settings.insert(ENV_PASSWORD, password, source);
    settings.take(ENV_USERNAME_AND_PASSWORD);
    Ok(())
}

/// Parse a boolean in the conventional forms: `1`, `t`, `T`, `TRUE`, `true`,
/// `True`, `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
