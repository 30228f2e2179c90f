use crate::PROTOCOL;
use crate::config::GlobalConfig;
use crate::engine::{InboundFinalizer, InboundHandlerConfig};
use crate::error::inbound::InboundError;
use crate::stream::{StreamConfig, build_stream_config};
use crate::user::TrojanClient;

use common::ErrorLocation;
use models::NodeInfo;

use std::fmt;

use const_format::concatcp;
use log::{debug, info};
use serde::{Serialize, Serializer};

const TAG_PREFIX: &str = concatcp!(PROTOCOL, "_");

/// Protocols the engine sniffs to restore the original destination.
pub const SNIFFING_DEST_OVERRIDE: [&str; 2] = ["http", "tls"];

// ============================================
// INBOUND STRUCTS
// ============================================

/// Inclusive listener port range, `"443"` or `"1000-2000"` in engine JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub from: u32,
    pub to: u32,
}

impl PortRange {
    pub fn single(port: u16) -> Self {
        Self {
            from: port.into(),
            to: port.into(),
        }
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}

impl Serialize for PortRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SniffingConfig {
    pub enabled: bool,
    pub dest_override: Vec<String>,
}

impl Default for SniffingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dest_override: SNIFFING_DEST_OVERRIDE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Protocol settings payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrojanSettings {
    pub clients: Vec<TrojanClient>,
}

/// A Trojan inbound before the engine has accepted it.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundConfig {
    pub port_range: PortRange,
    pub tag: String,
    pub protocol: &'static str,
    pub sniffing: SniffingConfig,
    pub settings: TrojanSettings,
    pub stream: StreamConfig,
}

impl InboundConfig {
    /// Replace the client list.
    pub fn with_clients(mut self, clients: Vec<TrojanClient>) -> Self {
        self.settings.clients = clients;
        self
    }
}

// ============================================
// BUILDERS
// ============================================

/// `"trojan_<port>"`. Callers building several inbounds must keep ports distinct.
pub fn build_tag(port: u16) -> String {
    format!("{TAG_PREFIX}{port}")
}

/// Assemble the inbound for `node` with an empty client list.
///
/// # Errors
///
/// - [`InboundError::MissingProtocol`] if the node has no Trojan descriptor
/// - [`InboundError::Stream`] if the transport settings do not decode
#[track_caller]
pub fn build_inbound(config: &GlobalConfig, node: &NodeInfo) -> Result<InboundConfig, InboundError> {
    let location = ErrorLocation::here();
    let trojan = node.trojan.as_ref().ok_or(InboundError::MissingProtocol {
        protocol: PROTOCOL,
        location,
    })?;

    let port = trojan.server_port();
    let tag = build_tag(port);

    debug!(
        "Trojan network settings for {tag}: {}",
        String::from_utf8_lossy(&trojan.network_settings)
    );
    let stream = build_stream_config(trojan, config)?;

    Ok(InboundConfig {
        port_range: PortRange::single(port),
        tag,
        protocol: PROTOCOL,
        sniffing: SniffingConfig::default(),
        settings: TrojanSettings::default(),
        stream,
    })
}

/// Assemble the inbound for `node` and hand it to `finalizer`.
///
/// Rejections from the finalizer surface as [`InboundError::Engine`].
#[track_caller]
pub fn inbound_builder<F>(
    config: &GlobalConfig,
    node: &NodeInfo,
    finalizer: &F,
) -> Result<InboundHandlerConfig, InboundError>
where
    F: InboundFinalizer + ?Sized,
{
    let inbound = build_inbound(config, node)?;
    let tag = inbound.tag.clone();
    let handler = finalizer.finalize(inbound)?;

    info!("Built inbound {tag}");
    Ok(handler)
}
