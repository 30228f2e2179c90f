use super::SettingsSchema;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSocketSettings {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub accept_proxy_protocol: bool,
    /// Seconds between keepalive pings; 0 disables them.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub heartbeat_period: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl SettingsSchema for WebSocketSettings {
    const FIELDS: &'static [&'static str] = &[
        "host",
        "path",
        "headers",
        "acceptProxyProtocol",
        "heartbeatPeriod",
    ];
}
