//! PEM certificate and key parsing.
//!
//! Responsibilities:
//! - Build a root certificate store from PEM encoded CA certificates.
//! - Parse a PEM client certificate and private key into a matching pair.
//!
//! Invariants:
//! - A root store is only returned if at least one certificate was accepted.
//! - A client pair is only returned if the key matches the leaf certificate.

use rustls::RootCertStore;
use rustls::crypto::aws_lc_rs;
use rustls::sign::CertifiedKey;
use rustls_pki_types::pem::PemObject;
use rustls_pki_types::{CertificateDer, PrivateKeyDer};

use super::error::{ConfigError, KeyPairError};
use crate::types::ClientCertificate;

/// Parse one or more PEM encoded CA certificates into a root store.
///
/// Non-certificate and malformed PEM sections are skipped, as are certificates
/// that cannot be parsed as trust anchors.
pub fn parse_root_store(pem: &str) -> Result<RootCertStore, ConfigError> {
    // The slice iterator consumes the lines of a failed section, so skipping
    // errors always makes progress.
    let certs = CertificateDer::pem_slice_iter(pem.as_bytes()).filter_map(Result::ok);

    let mut roots = RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(certs);
    tracing::debug!(added, ignored, "parsed server CA certificates");

    if added == 0 {
        return Err(ConfigError::InvalidServerCa);
    }
    Ok(roots)
}

/// Parse a PEM client certificate (chain) and its PEM private key.
///
/// The key may be PKCS#1, PKCS#8 or SEC1 encoded.
pub fn parse_client_certificate(
    cert_pem: &str,
    key_pem: &str,
) -> Result<ClientCertificate, ConfigError> {
    Ok(load_key_pair(cert_pem, key_pem)?)
}

fn load_key_pair(cert_pem: &str, key_pem: &str) -> Result<ClientCertificate, KeyPairError> {
    let cert_chain = CertificateDer::pem_slice_iter(cert_pem.as_bytes())
        .collect::<Result<Vec<_>, _>>()?;
    if cert_chain.is_empty() {
        return Err(KeyPairError::MissingCertificate);
    }

    let key = PrivateKeyDer::from_pem_slice(key_pem.as_bytes())?;

    let provider = aws_lc_rs::default_provider();
    let signing_key = provider.key_provider.load_private_key(key.clone_key())?;
    CertifiedKey::new(cert_chain.clone(), signing_key).keys_match()?;

    Ok(ClientCertificate { cert_chain, key })
}
