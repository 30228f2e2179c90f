//! Node and user descriptors as delivered by the control plane.
//!
//! These are plain data; nothing here knows about the proxy engine. The
//! translation into engine inbounds lives in `inbound-core`.

pub mod error;
pub mod node_info;
pub mod user_info;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use node_info::builder::TrojanNodeBuilder;
pub use node_info::{CommonNode, NodeInfo, TrojanNode};
pub use user_info::UserInfo;

#[cfg(test)]
mod tests;
