use super::SettingsSchema;
use super::range::Int32Range;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upload/download modes the engine accepts for `xhttp`. Empty means "auto".
pub const SPLIT_HTTP_MODES: [&str; 5] = ["", "auto", "packet-up", "stream-up", "stream-one"];

/// Chunked HTTP ("xhttp") transport settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitHttpSettings {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mode: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub x_padding_bytes: Int32Range,
    #[serde(
        default,
        rename = "noGRPCHeader",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub no_grpc_header: bool,
    #[serde(
        default,
        rename = "noSSEHeader",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub no_sse_header: bool,
    #[serde(default, skip_serializing_if = "Int32Range::is_unset")]
    pub sc_max_each_post_bytes: Int32Range,
    #[serde(default, skip_serializing_if = "Int32Range::is_unset")]
    pub sc_min_posts_interval_ms: Int32Range,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub sc_max_buffered_posts: i64,
    #[serde(default, skip_serializing_if = "Int32Range::is_unset")]
    pub sc_stream_up_server_secs: Int32Range,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl SettingsSchema for SplitHttpSettings {
    const FIELDS: &'static [&'static str] = &[
        "host",
        "path",
        "mode",
        "headers",
        "xPaddingBytes",
        "noGRPCHeader",
        "noSSEHeader",
        "scMaxEachPostBytes",
        "scMinPostsIntervalMs",
        "scMaxBufferedPosts",
        "scStreamUpServerSecs",
        "extra",
    ];
}
