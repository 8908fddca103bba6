//! TLS settings for etcd client connections.
//!
//! Responsibilities:
//! - Hold the skip-verify flag, trusted roots and client certificate.
//! - Build a `rustls::ClientConfig` from those settings.
//!
//! Does NOT handle:
//! - Parsing PEM material (see `loader::pem`).
//!
//! Invariants:
//! - `TlsConfig::default()` is the freshly allocated, empty sub-configuration.
//! - Private keys never appear in `Debug` output.

use std::fmt;
use std::sync::Arc;

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{CryptoProvider, aws_lc_rs, verify_tls12_signature, verify_tls13_signature};
use rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};
use rustls_pki_types::{CertificateDer, PrivateKeyDer, ServerName, UnixTime};

use crate::loader::ConfigError;

/// TLS sub-configuration.
#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    /// Accept any server certificate. Only for testing.
    pub insecure_skip_verify: bool,
    /// Trusted root certificates. `None` falls back to the bundled web PKI roots.
    pub root_certificates: Option<RootCertStore>,
    /// Certificates presented to the server for client authentication.
    pub client_certificates: Vec<ClientCertificate>,
}

/// A client certificate chain and its matching private key.
pub struct ClientCertificate {
    /// Leaf certificate first, followed by any intermediates.
    pub cert_chain: Vec<CertificateDer<'static>>,
    /// Private key for the leaf certificate.
    pub key: PrivateKeyDer<'static>,
}

impl Clone for ClientCertificate {
    fn clone(&self) -> Self {
        Self {
            cert_chain: self.cert_chain.clone(),
            key: self.key.clone_key(),
        }
    }
}

impl fmt::Debug for ClientCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCertificate")
            .field("cert_chain_len", &self.cert_chain.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl TlsConfig {
    /// Number of trusted root certificates explicitly configured.
    pub fn root_count(&self) -> usize {
        self.root_certificates.as_ref().map_or(0, RootCertStore::len)
    }

    /// Build a `rustls::ClientConfig` for the etcd client.
    ///
    /// Uses the aws-lc-rs crypto provider. When `insecure_skip_verify` is set
    /// the configured roots are ignored and any server certificate is accepted.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let provider = Arc::new(aws_lc_rs::default_provider());
        let builder = ClientConfig::builder_with_provider(provider.clone())
            .with_safe_default_protocol_versions()
            .map_err(ConfigError::TlsSetup)?;

        let builder = if self.insecure_skip_verify {
            tracing::warn!("TLS server certificate verification is disabled");
            builder
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(SkipServerVerification { provider }))
        } else {
            let roots = match &self.root_certificates {
                Some(roots) => roots.clone(),
                None => RootCertStore {
                    roots: webpki_roots::TLS_SERVER_ROOTS.to_vec(),
                },
            };
            builder.with_root_certificates(roots)
        };

        let config = match self.client_certificates.first() {
            Some(cert) => builder
                .with_client_auth_cert(cert.cert_chain.clone(), cert.key.clone_key())
                .map_err(ConfigError::TlsSetup)?,
            None => builder.with_no_client_auth(),
        };
        Ok(config)
    }
}

/// Accepts every server certificate but still checks handshake signatures.
#[derive(Debug)]
struct SkipServerVerification {
    provider: Arc<CryptoProvider>,
}

impl ServerCertVerifier for SkipServerVerification {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}
