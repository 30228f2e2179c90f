pub mod builder;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Descriptor for one endpoint as returned by the control plane.
///
/// Only the Trojan sub-descriptor is understood; a node of any other protocol
/// deserializes with `trojan: None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeInfo {
    #[serde(default)]
    pub trojan: Option<TrojanNode>,
}

/// Fields shared by every node type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommonNode {
    #[serde(default)]
    pub host: Option<String>,
    pub server_port: u16,
    #[serde(default)]
    pub server_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrojanNode {
    #[serde(flatten)]
    pub common: CommonNode,
    /// Transport name, e.g. `tcp`, `ws`, `xhttp`, `grpc`.
    #[serde(default)]
    pub network: String,
    /// Raw JSON settings for the transport. Empty when the field is absent; an
    /// explicit `null` is kept as the bytes `null`.
    #[serde(
        default,
        rename = "networkSettings",
        alias = "network_settings",
        deserialize_with = "raw_json_bytes"
    )]
    pub network_settings: Vec<u8>,
}

impl TrojanNode {
    pub fn server_port(&self) -> u16 {
        self.common.server_port
    }
}

/// Keeps the settings opaque: whatever JSON value arrived, `null` included, is
/// re-encoded as bytes and decoded later against the schema of the selected
/// transport. Only called when the field is present.
fn raw_json_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    serde_json::to_vec(&value).map_err(serde::de::Error::custom)
}
