use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_DIR_NAME: &str = "trojan-node";
const CONFIG_FILE_NAME: &str = "config.toml";

// ============================================
// ENUMS WITH DEFAULTS
// ============================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

// ============================================
// CONFIG STRUCTS
// ============================================

/// Certificate material for TLS-wrapped inbounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertConfig {
    #[serde(default)]
    pub cert_file: String,
    #[serde(default)]
    pub key_file: String,
}

impl CertConfig {
    pub fn new(cert_file: impl Into<String>, key_file: impl Into<String>) -> Self {
        Self {
            cert_file: cert_file.into(),
            key_file: key_file.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
    /// Also append log lines to this file when set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Process-wide configuration.
///
/// Builders only ever borrow this; it is never mutated after loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub cert: Option<CertConfig>,

    #[serde(default)]
    pub log: LogConfig,
}

// ============================================
// IMPLEMENTATION
// ============================================

impl GlobalConfig {
    pub fn with_cert(mut self, cert: CertConfig) -> Self {
        self.cert = Some(cert);
        self
    }

    /// Default location: `{config_dir}/trojan-node/config.toml`.
    ///
    /// Returns `None` on platforms without a per-user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from a TOML file.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file does not exist.
    /// Returns `Err(ConfigError)` if the file exists but cannot be read, parsed or validated.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.to_path_buf(),
                source: e,
            }
        })?;

        let config: GlobalConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the cert section names only
    /// one half of the certificate/key pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref cert) = self.cert {
            if !cert.cert_file.is_empty() && cert.key_file.is_empty() {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("cert_file {} has no key_file", cert.cert_file),
                });
            }

            if cert.cert_file.is_empty() && !cert.key_file.is_empty() {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("key_file {} has no cert_file", cert.key_file),
                });
            }
        }

        Ok(())
    }
}
