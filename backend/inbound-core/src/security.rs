//! Transport security selection.
//!
//! Trojan inbounds run under TLS whenever the process has a certificate
//! configured, whatever transport the node picked.

use crate::config::GlobalConfig;

use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityMode {
    #[default]
    None,
    Tls,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificatePair {
    #[serde(rename = "certificateFile")]
    pub cert_file: String,
    #[serde(rename = "keyFile")]
    pub key_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecuritySettings {
    pub mode: SecurityMode,
    /// Empty unless `mode` is [`SecurityMode::Tls`].
    pub certificates: Vec<CertificatePair>,
}

/// Decide the security layer from the process configuration.
pub fn attach_security(config: &GlobalConfig) -> SecuritySettings {
    match config.cert {
        Some(ref cert) if !cert.cert_file.is_empty() => {
            debug!("Attaching TLS certificate {}", cert.cert_file);
            SecuritySettings {
                mode: SecurityMode::Tls,
                certificates: vec![CertificatePair {
                    cert_file: cert.cert_file.clone(),
                    key_file: cert.key_file.clone(),
                }],
            }
        }
        _ => SecuritySettings::default(),
    }
}
