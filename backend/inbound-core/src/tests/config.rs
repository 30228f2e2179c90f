// Unit tests for process configuration loading

use crate::config::{CertConfig, GlobalConfig, LogLevel};
use crate::error::config::ConfigError;

use std::fs;

use tempfile::TempDir;

/// **VALUE**: Verifies a missing file yields defaults instead of an error.
///
/// **WHY THIS MATTERS**: A node without certificates is a valid deployment; the
/// operator should not have to create an empty file first.
#[test]
fn given_missing_file_when_loading_then_returns_defaults() {
    // GIVEN: A directory without config.toml
    let dir = TempDir::new().unwrap();

    // WHEN: Loading
    let config = GlobalConfig::load(&dir.path().join("config.toml")).unwrap();

    // THEN: Defaults
    assert!(config.cert.is_none());
    assert_eq!(config.log.level, LogLevel::Info);
    assert!(config.log.file.is_none());
}

#[test]
fn given_full_file_when_loading_then_sections_are_read() {
    // GIVEN: A config with cert and log sections
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[cert]
cert_file = "/etc/ssl/node.crt"
key_file = "/etc/ssl/node.key"

[log]
level = "debug"
file = "/var/log/trojan-node.log"
"#,
    )
    .unwrap();

    // WHEN: Loading
    let config = GlobalConfig::load(&path).unwrap();

    // THEN: Values are read
    assert_eq!(
        config.cert,
        Some(CertConfig::new("/etc/ssl/node.crt", "/etc/ssl/node.key"))
    );
    assert_eq!(config.log.level, LogLevel::Debug);
    assert_eq!(
        config.log.file.as_deref(),
        Some(std::path::Path::new("/var/log/trojan-node.log"))
    );
}

#[test]
fn given_malformed_toml_when_loading_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[cert\ncert_file = ").unwrap();

    let result = GlobalConfig::load(&path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_unknown_log_level_when_loading_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[log]\nlevel = \"loud\"\n").unwrap();

    let result = GlobalConfig::load(&path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies half a certificate pair is rejected at load time.
///
/// **BUG THIS CATCHES**: Would catch if validation stopped running on load, leaving
/// the engine to fail much later on a missing key.
#[test]
fn given_cert_without_key_when_loading_then_returns_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[cert]\ncert_file = \"node.crt\"\n").unwrap();

    let result = GlobalConfig::load(&path);

    match result {
        Err(ConfigError::ValidationError { reason, .. }) => {
            assert_eq!(reason, "cert_file node.crt has no key_file");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_key_without_cert_when_validating_then_returns_error() {
    let config = GlobalConfig::default().with_cert(CertConfig::new("", "node.key"));

    assert!(config.validate().is_err());
}

#[test]
fn given_unreadable_path_when_loading_then_returns_read_error() {
    // A directory exists but cannot be read as a file
    let dir = TempDir::new().unwrap();

    let result = GlobalConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}
