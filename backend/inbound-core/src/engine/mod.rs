//! Finalization of an assembled inbound into the engine's native form.
//!
//! The engine owns its schema. [`InboundFinalizer`] is the seam between the
//! builders and that schema; [`EngineValidator`] enforces the rules the engine
//! applies when it loads an inbound, so rejections surface while building
//! instead of at engine start.

use crate::PROTOCOL;
use crate::error::engine::EngineError;
use crate::inbound::{InboundConfig, PortRange, SniffingConfig, TrojanSettings};
use crate::security::SecurityMode;
use crate::stream::StreamConfig;
use crate::transport::TransportSettings;
use crate::transport::split_http::SPLIT_HTTP_MODES;

use log::debug;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Network names the engine has a transport for, including aliases.
pub const KNOWN_NETWORKS: [&str; 10] = [
    "tcp",
    "raw",
    "ws",
    "websocket",
    "grpc",
    "xhttp",
    "splithttp",
    "httpupgrade",
    "kcp",
    "mkcp",
];

/// Sniffers the engine can route on.
pub const KNOWN_SNIFFERS: [&str; 5] = ["http", "tls", "quic", "fakedns", "fakedns+others"];

/// Accepts or rejects an assembled inbound.
///
/// Implementations are shared across concurrent builds and must not keep
/// per-call state.
pub trait InboundFinalizer: Send + Sync {
    fn finalize(&self, inbound: InboundConfig) -> Result<InboundHandlerConfig, EngineError>;
}

/// Inbound accepted by the engine's validation rules.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundHandlerConfig {
    tag: String,
    port_range: PortRange,
    protocol: &'static str,
    sniffing: SniffingConfig,
    settings: TrojanSettings,
    stream: StreamConfig,
}

impl InboundHandlerConfig {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn port_range(&self) -> PortRange {
        self.port_range
    }

    pub fn protocol(&self) -> &str {
        self.protocol
    }

    pub fn stream(&self) -> &StreamConfig {
        &self.stream
    }

    /// Render as an engine inbound object.
    pub fn to_json_pretty(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for InboundHandlerConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("tag", &self.tag)?;
        map.serialize_entry("port", &self.port_range)?;
        map.serialize_entry("protocol", self.protocol)?;
        map.serialize_entry("settings", &self.settings)?;
        map.serialize_entry("streamSettings", &self.stream)?;
        map.serialize_entry("sniffing", &self.sniffing)?;
        map.end()
    }
}

/// Default finalizer enforcing the engine's load-time checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineValidator;

impl InboundFinalizer for EngineValidator {
    fn finalize(&self, inbound: InboundConfig) -> Result<InboundHandlerConfig, EngineError> {
        validate_port_range(inbound.port_range)?;

        if inbound.protocol != PROTOCOL {
            return Err(EngineError::validation(format!(
                "unknown inbound protocol: {}",
                inbound.protocol
            )));
        }

        validate_clients(&inbound.settings)?;
        validate_sniffing(&inbound.sniffing)?;
        validate_stream(&inbound.stream)?;

        debug!("Inbound {} passed engine validation", inbound.tag);

        Ok(InboundHandlerConfig {
            tag: inbound.tag,
            port_range: inbound.port_range,
            protocol: inbound.protocol,
            sniffing: inbound.sniffing,
            settings: inbound.settings,
            stream: inbound.stream,
        })
    }
}

fn validate_port_range(range: PortRange) -> Result<(), EngineError> {
    if range.from == 0 {
        return Err(EngineError::validation("port range starts at 0"));
    }

    if range.from > range.to || range.to > u32::from(u16::MAX) {
        return Err(EngineError::validation(format!("invalid port range: {range}")));
    }

    Ok(())
}

fn validate_clients(settings: &TrojanSettings) -> Result<(), EngineError> {
    if let Some(client) = settings.clients.iter().find(|c| c.password.is_empty()) {
        return Err(EngineError::validation(format!(
            "Trojan password is not specified for {}",
            client.email
        )));
    }

    Ok(())
}

fn validate_sniffing(sniffing: &SniffingConfig) -> Result<(), EngineError> {
    if let Some(unknown) = sniffing
        .dest_override
        .iter()
        .find(|d| !KNOWN_SNIFFERS.contains(&d.as_str()))
    {
        return Err(EngineError::validation(format!(
            "unknown sniffing destOverride: {unknown}"
        )));
    }

    Ok(())
}

fn validate_stream(stream: &StreamConfig) -> Result<(), EngineError> {
    let network = stream.network();
    if !KNOWN_NETWORKS.contains(&network.to_ascii_lowercase().as_str()) {
        return Err(EngineError::validation(format!(
            "unknown transport protocol: {network}"
        )));
    }

    if stream.security.mode == SecurityMode::Tls {
        if stream.security.certificates.is_empty() {
            return Err(EngineError::validation("tls enabled without certificates"));
        }

        if let Some(cert) = stream
            .security
            .certificates
            .iter()
            .find(|c| c.cert_file.is_empty() || c.key_file.is_empty())
        {
            return Err(EngineError::validation(format!(
                "incomplete certificate pair: cert={:?} key={:?}",
                cert.cert_file, cert.key_file
            )));
        }
    }

    if let Some(TransportSettings::SplitHttp(ref split)) = stream.transport {
        if !SPLIT_HTTP_MODES.contains(&split.mode.as_str()) {
            return Err(EngineError::validation(format!(
                "unsupported xhttp mode: {}",
                split.mode
            )));
        }

        let padding = split.x_padding_bytes;
        if padding.to <= 0 {
            return Err(EngineError::validation(format!(
                "invalid x_padding length:{}",
                padding.to
            )));
        }

        if padding.from > padding.to {
            return Err(EngineError::validation(format!(
                "invalid x_padding range: {padding}"
            )));
        }
    }

    Ok(())
}
