use crate::config::GlobalConfig;
use crate::error::stream::StreamError;
use crate::padding::normalize_padding;
use crate::security::{CertificatePair, SecurityMode, SecuritySettings, attach_security};
use crate::transport::{TransportKind, TransportSettings, parse_transport_settings};

use models::TrojanNode;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Transport and security layers for one inbound.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamConfig {
    pub kind: TransportKind,
    /// `None` when the node sent no usable settings for its transport.
    pub transport: Option<TransportSettings>,
    pub security: SecuritySettings,
}

impl StreamConfig {
    pub fn network(&self) -> &str {
        self.kind.as_str()
    }
}

/// Build the stream layer for a Trojan node.
///
/// # Errors
///
/// Returns [`StreamError::SettingsParse`] if the settings of a `ws`, `xhttp`
/// or `grpc` node do not decode. Nothing is returned on error.
pub fn build_stream_config(
    node: &TrojanNode,
    config: &GlobalConfig,
) -> Result<StreamConfig, StreamError> {
    let kind = TransportKind::parse(&node.network);

    let transport = parse_transport_settings(&kind, &node.network_settings)?;
    let security = attach_security(config);

    let transport = transport.map(|settings| match settings {
        TransportSettings::SplitHttp(split) => TransportSettings::SplitHttp(normalize_padding(split)),
        other => other,
    });

    Ok(StreamConfig {
        kind,
        transport,
        security,
    })
}

#[derive(Serialize)]
struct TlsSettings<'a> {
    certificates: &'a [CertificatePair],
}

/// Engine `streamSettings` layout.
impl Serialize for StreamConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("network", self.network())?;
        map.serialize_entry("security", &self.security.mode)?;

        if self.security.mode == SecurityMode::Tls {
            map.serialize_entry(
                "tlsSettings",
                &TlsSettings {
                    certificates: &self.security.certificates,
                },
            )?;
        }

        if let Some(ref transport) = self.transport {
            let key = transport.settings_key();
            match transport {
                TransportSettings::Tcp(settings) => map.serialize_entry(key, settings)?,
                TransportSettings::WebSocket(settings) => map.serialize_entry(key, settings)?,
                TransportSettings::SplitHttp(settings) => map.serialize_entry(key, settings)?,
                TransportSettings::Grpc(settings) => map.serialize_entry(key, settings)?,
            }
        }

        map.end()
    }
}
