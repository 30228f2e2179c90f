use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum EngineError {
    #[error("Engine Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Engine Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}

impl EngineError {
    #[track_caller]
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation {
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        EngineError::Serialization {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
