//! Admin credential record

use serde::{Deserialize, Serialize};

/// The single admin account and its login flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub logged_in: bool,
}

impl SessionRecord {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        SessionRecord {
            username: username.into(),
            password_hash: password_hash.into(),
            logged_in: false,
        }
    }
}
