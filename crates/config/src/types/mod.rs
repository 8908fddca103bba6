//! Configuration type definitions for etcd clients.
//!
//! Responsibilities:
//! - Define the client `Config` (endpoints, credentials, TLS, timing).
//! - Define the optional TLS sub-configuration and client certificate pair.
//! - Convert TLS settings into a `rustls::ClientConfig` for the client library.
//!
//! Does NOT handle:
//! - Reading environment variables or files (see `loader` module).
//! - Establishing connections (the etcd client library does that).
//!
//! Invariants:
//! - Passwords use `secrecy::SecretString` to prevent accidental logging.
//! - `Config::tls` is `None` unless a TLS setting was explicitly supplied.

pub(crate) mod connection;
mod tls;

pub use connection::Config;
pub use tls::{ClientCertificate, TlsConfig};
