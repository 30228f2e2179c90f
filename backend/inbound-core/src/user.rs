use common::RedactedPassword;
use models::UserInfo;

use serde::Serialize;

/// One Trojan account as the engine expects it in `settings.clients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrojanClient {
    #[serde(serialize_with = "RedactedPassword::serialize_exposed")]
    pub password: RedactedPassword,
    pub email: String,
    pub level: u32,
}

/// Convert panel users into Trojan clients for the inbound tagged `tag`.
///
/// The user's UUID doubles as the Trojan password.
pub fn build_users(tag: &str, users: &[UserInfo]) -> Vec<TrojanClient> {
    users
        .iter()
        .map(|user| TrojanClient {
            password: RedactedPassword::from(user.uuid.as_str()),
            email: build_user_email(tag, user.id, &user.uuid),
            level: 0,
        })
        .collect()
}

/// `"<tag>|<id>|<uuid>"`, the key traffic statistics are reported under.
pub fn build_user_email(tag: &str, id: i64, uuid: &str) -> String {
    format!("{tag}|{id}|{uuid}")
}
