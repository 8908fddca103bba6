//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for every environment resolution failure.
//! - Wrap lower-level PEM and rustls errors for client key pair parsing.
//!
//! Does NOT handle:
//! - Logging. Errors are returned to the caller, which decides how to report them.
//!
//! Invariants:
//! - Every variant names the offending variable (and file path where relevant).
//! - Secret values (passwords, private keys) never appear in messages.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Both `VAR` and `VAR_FILE` are set.
    #[error("conflicting value for {var}: both {var} and {var}_FILE are set")]
    ConflictingValue { var: String },

    /// The file named by `VAR_FILE` could not be read.
    #[error("error reading {path:?} (for {var}_FILE): {source}")]
    FileRead {
        var: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("you can't set both ETCD_USERNAME_AND_PASSWORD and ETCD_USERNAME or ETCD_PASSWORD")]
    CredentialConflict,

    #[error(
        "invalid ETCD_USERNAME_AND_PASSWORD: user and password should be separated with a colon (:)"
    )]
    MalformedCredentials,

    #[error("failed to parse {var} as bool ({value:?})")]
    InvalidBool { var: String, value: String },

    #[error("certificate(s) in ETCD_SERVER_CA(_FILE) were invalid PEM certificates")]
    InvalidServerCa,

    #[error("failed to parse ETCD_CLIENT_CERT+ETCD_CLIENT_KEY: {source}")]
    InvalidClientKeyPair {
        #[source]
        source: KeyPairError,
    },

    #[error(
        "either both of ETCD_CLIENT_CERT(_FILE) and ETCD_CLIENT_KEY(_FILE) must be given or neither"
    )]
    IncompleteClientKeyPair,

    /// Building the rustls client configuration failed.
    #[error("failed to build TLS client configuration: {0}")]
    TlsSetup(#[source] rustls::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

/// Reasons a client certificate and key do not form a usable pair.
#[derive(Error, Debug)]
pub enum KeyPairError {
    #[error("no certificate found in client certificate PEM")]
    MissingCertificate,

    #[error("invalid PEM: {0}")]
    Pem(#[from] rustls_pki_types::pem::Error),

    #[error("{0}")]
    Tls(#[from] rustls::Error),
}

impl From<KeyPairError> for ConfigError {
    fn from(source: KeyPairError) -> Self {
        ConfigError::InvalidClientKeyPair { source }
    }
}
