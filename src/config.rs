use serde::{Deserialize, Serialize};

/// Credentials for the device group endpoint
///
/// Both fields are optional. Construction never validates them; FCM itself
/// answers 401 when they are missing or wrong.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Server key, sent as `Authorization: key=<apiKey>`
    pub api_key: Option<String>,
    /// Sender id (project number), sent as the `project_id` header
    pub sender_id: Option<String>,
}

impl GroupConfig {
    /// Create a config with both credentials set
    pub fn new(api_key: impl Into<String>, sender_id: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            sender_id: Some(sender_id.into()),
        }
    }

    /// Read credentials from `FCM_API_KEY` and `FCM_SENDER_ID`
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("FCM_API_KEY").ok(),
            sender_id: std::env::var("FCM_SENDER_ID").ok(),
        }
    }
}
