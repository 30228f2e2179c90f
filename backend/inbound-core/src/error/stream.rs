use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StreamError {
    /// Settings blob did not match the schema of a strictly decoded transport.
    #[error("Transport Settings Parse Error: unmarshal {network} config error: {source} {location}")]
    SettingsParse {
        network: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}
