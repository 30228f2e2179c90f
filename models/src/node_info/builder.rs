use crate::error::model_error::ModelError;
use crate::{CommonNode, ErrorLocation, TrojanNode};

/// Builder for creating validated TrojanNode instances.
///
/// The control plane normally hands over JSON; this builder is the path for
/// callers assembling a node by hand.
#[derive(Debug, Default)]
pub struct TrojanNodeBuilder {
    server_port: Option<u16>,
    network: Option<String>,
    network_settings: Vec<u8>,
    host: Option<String>,
    server_name: Option<String>,
}

impl TrojanNodeBuilder {
    pub fn with_server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_network_settings(mut self, settings: impl Into<Vec<u8>>) -> Self {
        self.network_settings = settings.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    /// Build the TrojanNode with validation.
    ///
    /// Settings are not checked here; whether they parse depends on the
    /// transport and is decided when the stream is built.
    #[track_caller]
    pub fn build(self) -> Result<TrojanNode, ModelError> {
        let location = ErrorLocation::here();

        let server_port = self.server_port.ok_or(ModelError::Validation {
            message: String::from("Server port is required"),
            location,
        })?;

        if server_port == 0 {
            return Err(ModelError::Validation {
                message: String::from("Server port must be non-zero"),
                location,
            });
        }

        let network = self.network.ok_or(ModelError::Validation {
            message: String::from("Network is required"),
            location,
        })?;

        if network.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Network cannot be empty"),
                location,
            });
        }

        Ok(TrojanNode {
            common: CommonNode {
                host: self.host,
                server_port,
                server_name: self.server_name,
            },
            network,
            network_settings: self.network_settings,
        })
    }
}
