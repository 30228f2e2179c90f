//! Transport selection and per-transport settings decoding.
//!
//! Each transport has its own schema type. The settings blob arrives untyped
//! from the control plane and is decoded against the schema of the transport
//! the node names; nothing else about the blob is assumed.

pub mod grpc;
pub mod range;
pub mod split_http;
pub mod tcp;
pub mod ws;

pub use grpc::GrpcSettings;
pub use range::Int32Range;
pub use split_http::SplitHttpSettings;
pub use tcp::TcpSettings;
pub use ws::WebSocketSettings;

use crate::error::stream::StreamError;

use common::ErrorLocation;

use std::fmt;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

const TCP: &str = "tcp";
const WEBSOCKET: &str = "ws";
const SPLIT_HTTP: &str = "xhttp";
const GRPC: &str = "grpc";

/// Wire encapsulation named by a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportKind {
    Tcp,
    WebSocket,
    SplitHttp,
    Grpc,
    /// Any other name. Kept verbatim so the engine can accept or reject it.
    Unrecognized(String),
}

impl TransportKind {
    pub fn parse(network: &str) -> Self {
        match network {
            TCP => TransportKind::Tcp,
            WEBSOCKET => TransportKind::WebSocket,
            SPLIT_HTTP => TransportKind::SplitHttp,
            GRPC => TransportKind::Grpc,
            other => TransportKind::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TransportKind::Tcp => TCP,
            TransportKind::WebSocket => WEBSOCKET,
            TransportKind::SplitHttp => SPLIT_HTTP,
            TransportKind::Grpc => GRPC,
            TransportKind::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded settings for exactly one transport.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportSettings {
    Tcp(TcpSettings),
    WebSocket(WebSocketSettings),
    SplitHttp(SplitHttpSettings),
    Grpc(GrpcSettings),
}

impl TransportSettings {
    /// Key the settings object lives under in the engine's `streamSettings`.
    pub fn settings_key(&self) -> &'static str {
        match self {
            TransportSettings::Tcp(_) => "tcpSettings",
            TransportSettings::WebSocket(_) => "wsSettings",
            TransportSettings::SplitHttp(_) => "xhttpSettings",
            TransportSettings::Grpc(_) => "grpcSettings",
        }
    }

    pub fn as_split_http(&self) -> Option<&SplitHttpSettings> {
        match self {
            TransportSettings::SplitHttp(settings) => Some(settings),
            _ => None,
        }
    }
}

/// A transport settings object as the engine names its fields.
pub trait SettingsSchema: DeserializeOwned + Default {
    /// Wire names of every top-level field.
    const FIELDS: &'static [&'static str];
}

/// Decode `blob` against the schema of `kind`.
///
/// Returns `Ok(None)` when the blob is empty, when the kind is unrecognized,
/// and when raw stream settings fail to decode. A `null` blob yields the
/// schema's defaults. Top-level keys match field names case-insensitively, an
/// exact match winning. Malformed settings for every other transport abort
/// with [`StreamError::SettingsParse`].
#[track_caller]
pub fn parse_transport_settings(
    kind: &TransportKind,
    blob: &[u8],
) -> Result<Option<TransportSettings>, StreamError> {
    if blob.is_empty() {
        return Ok(None);
    }

    let settings = match kind {
        TransportKind::Tcp => decode_lenient::<TcpSettings>(kind, blob).map(TransportSettings::Tcp),
        TransportKind::WebSocket => Some(TransportSettings::WebSocket(decode_strict(kind, blob)?)),
        TransportKind::SplitHttp => Some(TransportSettings::SplitHttp(decode_strict(kind, blob)?)),
        TransportKind::Grpc => Some(TransportSettings::Grpc(decode_strict(kind, blob)?)),
        TransportKind::Unrecognized(name) => {
            debug!("No settings schema for network {name}, ignoring settings");
            None
        }
    };

    Ok(settings)
}

// Raw stream settings have always been best-effort: a bad blob falls back to
// engine defaults instead of failing the node.
fn decode_lenient<T: SettingsSchema>(kind: &TransportKind, blob: &[u8]) -> Option<T> {
    match decode(blob) {
        Ok(settings) => Some(settings),
        Err(e) => {
            debug!("Ignoring malformed {kind} settings: {e}");
            None
        }
    }
}

#[track_caller]
fn decode_strict<T: SettingsSchema>(kind: &TransportKind, blob: &[u8]) -> Result<T, StreamError> {
    let location = ErrorLocation::here();

    decode(blob).map_err(|e| StreamError::SettingsParse {
        network: kind.to_string(),
        location,
        source: e,
    })
}

fn decode<T: SettingsSchema>(blob: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::from_slice::<Value>(blob)? {
        Value::Null => Ok(T::default()),
        Value::Object(object) => serde_json::from_value(Value::Object(fold_keys(object, T::FIELDS))),
        other => serde_json::from_value(other),
    }
}

/// Rename keys that differ from a field name only in ASCII case.
fn fold_keys(object: Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    let mut folded = Map::with_capacity(object.len());
    let mut inexact = Vec::new();

    for (key, value) in object {
        if fields.contains(&key.as_str()) {
            folded.insert(key, value);
        } else {
            inexact.push((key, value));
        }
    }

    for (key, value) in inexact {
        let canonical = fields
            .iter()
            .find(|field| field.eq_ignore_ascii_case(&key))
            .map(|field| field.to_string());

        match canonical {
            Some(field) if !folded.contains_key(&field) => {
                folded.insert(field, value);
            }
            Some(_) => {}
            None => {
                folded.insert(key, value);
            }
        }
    }

    folded
}
