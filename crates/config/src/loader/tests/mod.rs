//! Tests for environment resolution.
//!
//! Responsibilities:
//! - Test `VAR` / `VAR_FILE` loading and conflicts.
//! - Test credential handling, including the combined form.
//! - Test TLS settings (skip verify, server CA, client key pair).
//! - Test end-to-end resolution against synthetic and real environments.
//!
//! Invariants:
//! - Most tests inject a synthetic `HashMap` environment instead of mutating the process.
//! - Tests that touch the process environment use `serial_test` and `env_lock()`.
//! - Temporary files are cleaned up automatically via `tempfile`.

use std::collections::HashMap;
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build a synthetic environment from key/value pairs.
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Generate a self-signed certificate and its PKCS#8 key, both PEM encoded.
pub fn self_signed_pem(name: &str) -> (String, String) {
    let rcgen::CertifiedKey { cert, signing_key } =
        rcgen::generate_simple_self_signed(vec![name.to_string()]).unwrap();
    (cert.pem(), signing_key.serialize_pem())
}
