use super::SettingsSchema;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw stream transport settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpSettings {
    /// Header obfuscation object, passed through to the engine untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Value>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub accept_proxy_protocol: bool,
}

impl SettingsSchema for TcpSettings {
    const FIELDS: &'static [&'static str] = &[
        "header",
        "acceptProxyProtocol",
    ];
}
