use super::SettingsSchema;

use serde::{Deserialize, Serialize};

/// RPC stream ("grpc") transport settings.
///
/// The keepalive fields keep the engine's snake_case names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrpcSettings {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub authority: String,
    #[serde(default, rename = "serviceName", skip_serializing_if = "String::is_empty")]
    pub service_name: String,
    #[serde(default, rename = "multiMode", skip_serializing_if = "std::ops::Not::not")]
    pub multi_mode: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub idle_timeout: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub health_check_timeout: i32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub permit_without_stream: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub initial_windows_size: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

impl SettingsSchema for GrpcSettings {
    const FIELDS: &'static [&'static str] = &[
        "authority",
        "serviceName",
        "multiMode",
        "idle_timeout",
        "health_check_timeout",
        "permit_without_stream",
        "initial_windows_size",
        "user_agent",
    ];
}
