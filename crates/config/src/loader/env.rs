//! Environment variable lookup and settings loading.
//!
//! Responsibilities:
//! - Abstract the process environment behind the `EnvSource` trait.
//! - Resolve each recognized variable from `VAR` or `VAR_FILE` into `Settings`.
//!
//! Does NOT handle:
//! - Interpreting values (see resolver.rs and pem.rs).
//! - .env file loading (see dotenv.rs).
//!
//! Invariants:
//! - Empty values are treated as unset, for both `VAR` and `VAR_FILE`.
//! - Values are used verbatim: no trimming, file contents included.
//! - Setting both `VAR` and `VAR_FILE` is an error.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use super::error::ConfigError;
use crate::constants::{FILE_SUFFIX, RECOGNIZED_VARS};

/// Read-only key/value lookup of environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Read `key` from `env`, treating empty values as unset.
fn non_empty(env: &(impl EnvSource + ?Sized), key: &str) -> Option<String> {
    env.var(key).filter(|v| !v.is_empty())
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// The variable itself.
    Direct,
    /// The file named by the `_FILE` variant.
    File(PathBuf),
}

/// Resolved values of the recognized variables for one resolution pass.
#[derive(Debug, Default)]
pub struct Settings {
    values: BTreeMap<&'static str, (String, SettingSource)>,
}

impl Settings {
    /// Value of a recognized variable, if it was supplied.
    pub fn get(&self, var: &str) -> Option<&str> {
        self.values.get(var).map(|(value, _)| value.as_str())
    }

    /// Where the value of `var` came from.
    pub fn source(&self, var: &str) -> Option<&SettingSource> {
        self.values.get(var).map(|(_, source)| source)
    }

    /// Whether `var` was supplied.
    pub fn contains(&self, var: &str) -> bool {
        self.values.contains_key(var)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Names of the supplied variables.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub(crate) fn insert(&mut self, var: &'static str, value: String, source: SettingSource) {
        if value.is_empty() {
            self.values.remove(var);
        } else {
            self.values.insert(var, (value, source));
        }
    }

    pub(crate) fn take(&mut self, var: &str) -> Option<String> {
        self.values.remove(var).map(|(value, _)| value)
    }
}

/// Load every recognized variable from `env`, directly or via its `_FILE` sibling.
pub fn load_settings(env: &(impl EnvSource + ?Sized)) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    for var in RECOGNIZED_VARS {
        let file_var = format!("{var}{FILE_SUFFIX}");
        match (non_empty(env, var), non_empty(env, &file_var)) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::ConflictingValue {
                    var: var.to_string(),
                });
            }
            (Some(value), None) => {
                tracing::debug!(var, "using value from environment");
                settings.insert(var, value, SettingSource::Direct);
            }
            (None, Some(path)) => {
                let path = PathBuf::from(path);
                let value =
                    std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
                        var: var.to_string(),
                        path: path.clone(),
                        source,
                    })?;
                tracing::debug!(var, path = %path.display(), "using value from file");
                settings.insert(var, value, SettingSource::File(path));
            }
            (None, None) => {}
        }
    }

    Ok(settings)
}
