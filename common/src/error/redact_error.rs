use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a redacted secret is asked to serialize itself implicitly.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Redacted Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
