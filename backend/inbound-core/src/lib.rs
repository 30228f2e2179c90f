pub mod config;
pub mod engine;
pub mod error;
pub mod inbound;
pub mod padding;
pub mod security;
pub mod stream;
pub mod transport;
pub mod user;

#[cfg(test)]
mod tests;

pub use config::{CertConfig, GlobalConfig};
pub use engine::{EngineValidator, InboundFinalizer, InboundHandlerConfig};
pub use inbound::{InboundConfig, build_inbound, inbound_builder};
pub use stream::{StreamConfig, build_stream_config};
pub use user::{TrojanClient, build_user_email, build_users};

/// Protocol identifier written into every inbound this crate builds.
pub const PROTOCOL: &str = "trojan";
