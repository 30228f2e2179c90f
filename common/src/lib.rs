//! Shared building blocks for the trojan-node workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error location tracking and secret handling
//! - **models**: Node and user descriptors as delivered by the control plane
//! - **inbound-core**: Translation of node descriptors into engine inbounds
//! - **trojan-node**: Command line wiring, logging and process configuration

pub mod error;
pub mod redacted_password;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use redacted_password::RedactedPassword;

#[cfg(test)]
mod tests;
