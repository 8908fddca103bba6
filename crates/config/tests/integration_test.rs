//! Integration tests for resolving an etcd client configuration.
//!
//! These tests use only the public API, the way a service would at startup:
//! start from `defaults()`, customize, then layer the environment on top.

use std::collections::BTreeMap;
use std::fs;
use std::time::Duration;

use etcd_env_config::{
    Config, ConfigError, EnvSource, SettingSource, apply_from, apply_in_place, defaults,
    load_settings,
};
use secrecy::ExposeSecret;
use tempfile::TempDir;

fn environment(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn self_signed(name: &str) -> (String, String) {
    let rcgen::CertifiedKey { cert, signing_key } =
        rcgen::generate_simple_self_signed(vec![name.to_string()]).unwrap();
    (cert.pem(), signing_key.serialize_pem())
}

/// Secrets mounted as files, the usual container deployment layout.
#[test]
fn test_mounted_secret_files() {
    let dir = TempDir::new().unwrap();
    let (ca, _) = self_signed("etcd-ca");
    let (cert, key) = self_signed("etcd-client");
    let ca_path = dir.path().join("ca.pem");
    let cert_path = dir.path().join("client.pem");
    let key_path = dir.path().join("client-key.pem");
    let password_path = dir.path().join("password");
    fs::write(&ca_path, &ca).unwrap();
    fs::write(&cert_path, &cert).unwrap();
    fs::write(&key_path, &key).unwrap();
    fs::write(&password_path, "s3cret").unwrap();

    let env = environment(&[
        ("ETCD_ENDPOINTS", "https://etcd-0:2379,https://etcd-1:2379"),
        ("ETCD_USERNAME", "svc"),
        ("ETCD_PASSWORD_FILE", password_path.to_str().unwrap()),
        ("ETCD_SERVER_CA_FILE", ca_path.to_str().unwrap()),
        ("ETCD_CLIENT_CERT_FILE", cert_path.to_str().unwrap()),
        ("ETCD_CLIENT_KEY_FILE", key_path.to_str().unwrap()),
    ]);

    let settings = load_settings(&env).unwrap();
    assert_eq!(settings.source("ETCD_USERNAME"), Some(&SettingSource::Direct));
    assert_eq!(
        settings.source("ETCD_PASSWORD"),
        Some(&SettingSource::File(password_path.clone()))
    );

    let config = apply_from(defaults(), &env).unwrap();
    assert_eq!(
        config.endpoints,
        vec!["https://etcd-0:2379", "https://etcd-1:2379"]
    );
    assert_eq!(config.username.as_deref(), Some("svc"));
    assert_eq!(config.password.as_ref().unwrap().expose_secret(), "s3cret");

    let tls = config.tls.as_ref().unwrap();
    assert_eq!(tls.root_count(), 1);
    assert_eq!(tls.client_certificates.len(), 1);
    assert!(tls.client_config().is_ok());
}

/// Custom defaults survive when the environment does not override them.
#[test]
fn test_custom_defaults_are_layered() {
    let mut base = defaults();
    base.dial_timeout = Duration::from_secs(2);
    base.auto_sync_interval = Duration::ZERO;
    base.endpoints = vec!["localhost:2379".to_string()];

    let config = apply_from(base, &environment(&[("ETCD_INSECURE_SKIP_VERIFY", "True")])).unwrap();
    assert_eq!(config.dial_timeout, Duration::from_secs(2));
    assert_eq!(config.auto_sync_interval, Duration::ZERO);
    assert_eq!(config.endpoints, vec!["localhost:2379"]);
    assert!(config.tls.unwrap().insecure_skip_verify);
}

/// Any type implementing `EnvSource` can drive resolution.
#[test]
fn test_custom_env_source() {
    struct Prefixed;

    impl EnvSource for Prefixed {
        fn var(&self, key: &str) -> Option<String> {
            (key == "ETCD_ENDPOINTS").then(|| "custom:2379".to_string())
        }
    }

    let config = apply_from(defaults(), &Prefixed).unwrap();
    assert_eq!(config.endpoints, vec!["custom:2379"]);
}

/// Errors are descriptive enough to print verbatim at startup.
#[test]
fn test_error_messages_are_actionable() {
    let cases: Vec<(Vec<(&str, &str)>, &str)> = vec![
        (
            vec![("ETCD_SERVER_CA", "x"), ("ETCD_SERVER_CA_FILE", "/x")],
            "both ETCD_SERVER_CA and ETCD_SERVER_CA_FILE are set",
        ),
        (
            vec![("ETCD_USERNAME_AND_PASSWORD", "a:b"), ("ETCD_USERNAME", "c")],
            "you can't set both ETCD_USERNAME_AND_PASSWORD and ETCD_USERNAME or ETCD_PASSWORD",
        ),
        (
            vec![("ETCD_USERNAME_AND_PASSWORD", "ab")],
            "separated with a colon (:)",
        ),
        (
            vec![("ETCD_INSECURE_SKIP_VERIFY", "maybe")],
            "failed to parse ETCD_INSECURE_SKIP_VERIFY as bool (\"maybe\")",
        ),
        (
            vec![("ETCD_SERVER_CA", "nope")],
            "were invalid PEM certificates",
        ),
        (
            vec![("ETCD_CLIENT_KEY", "k")],
            "must be given or neither",
        ),
    ];

    for (pairs, expected) in cases {
        let err = apply_from(Config::default(), &environment(&pairs)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(expected), "expected {expected:?} in {msg:?}");
    }
}

/// A failed pass leaves earlier writes in place; the result must not be used.
#[test]
fn test_partial_application_on_error() {
    let mut config = defaults();
    let result = apply_in_place(
        &mut config,
        &environment(&[
            ("ETCD_ENDPOINTS", "a:2379"),
            ("ETCD_USERNAME", "root"),
            ("ETCD_INSECURE_SKIP_VERIFY", "true"),
            ("ETCD_SERVER_CA", "not pem"),
        ]),
    );
    assert!(matches!(result, Err(ConfigError::InvalidServerCa)));
    assert_eq!(config.endpoints, vec!["a:2379"]);
    assert_eq!(config.username.as_deref(), Some("root"));
    let tls = config.tls.unwrap();
    assert!(tls.insecure_skip_verify);
    assert!(tls.root_certificates.is_none());
}
