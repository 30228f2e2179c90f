use serde::Deserialize;

/// A panel user entitled to connect to a node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub uuid: String,
}

impl UserInfo {
    pub fn new(id: i64, uuid: impl Into<String>) -> Self {
        Self {
            id,
            uuid: uuid.into(),
        }
    }
}
