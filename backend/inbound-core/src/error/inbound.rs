use crate::error::engine::EngineError;
use crate::error::stream::StreamError;

use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum InboundError {
    #[error("Missing Protocol Error: node info missing {protocol} config {location}")]
    MissingProtocol {
        protocol: &'static str,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
