use common::ErrorLocation;
use inbound_core::error::config::ConfigError;
use inbound_core::error::engine::EngineError;
use inbound_core::error::inbound::InboundError;

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Error from this binary
    #[error("Node Error: {message} {location}")]
    Node {
        message: String,
        location: ErrorLocation,
    },

    /// Input or output file could not be read or written
    #[error("IO Error: {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    /// Node or user JSON did not decode
    #[error("Input Parse Error: {path}: {reason} {location}")]
    InputParse {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Inbound(#[from] InboundError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
