//! Environment-driven connection configuration for etcd clients.
//!
//! This crate builds a ready-to-use client configuration (endpoints,
//! credentials, TLS material, timeouts) from a fixed set of `ETCD_*`
//! environment variables.
//!
//! Use [`get`] for the common case. To customize defaults, start from
//! [`defaults`], modify the returned value and pass it to [`apply`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, EnvSource, KeyPairError, ProcessEnv, Settings, SettingSource, apply, apply_from,
    apply_in_place, defaults, get, load_dotenv, load_settings, parse_bool,
    parse_client_certificate, parse_root_store,
};
pub use types::{ClientCertificate, Config, TlsConfig};
