use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a descriptor assembled by hand is incomplete.
#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Node Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}
