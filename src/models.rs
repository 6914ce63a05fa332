use serde::{Deserialize, Serialize};

/// A device group management operation
///
/// The device group endpoint multiplexes create/add/remove through one POST
/// body distinguished by its `operation` field; this enum keeps the three
/// shapes apart until serialization. `registration_ids` left as `None` is
/// sent as an empty list, never as null.
#[derive(Debug, Clone)]
pub enum GroupOperation {
    Create {
        name: String,
        registration_ids: Option<Vec<String>>,
    },
    Add {
        name: String,
        key: String,
        registration_ids: Option<Vec<String>>,
    },
    Remove {
        name: String,
        key: String,
        registration_ids: Option<Vec<String>>,
    },
}

impl GroupOperation {
    /// Map the operation to its wire payload
    pub(crate) fn into_request(self) -> GroupRequest {
        match self {
            GroupOperation::Create {
                name,
                registration_ids,
            } => GroupRequest {
                operation: "create",
                notification_key_name: name,
                notification_key: None,
                registration_ids: registration_ids.unwrap_or_default(),
            },
            GroupOperation::Add {
                name,
                key,
                registration_ids,
            } => GroupRequest {
                operation: "add",
                notification_key_name: name,
                notification_key: Some(key),
                registration_ids: registration_ids.unwrap_or_default(),
            },
            GroupOperation::Remove {
                name,
                key,
                registration_ids,
            } => GroupRequest {
                operation: "remove",
                notification_key_name: name,
                notification_key: Some(key),
                registration_ids: registration_ids.unwrap_or_default(),
            },
        }
    }
}

/// Device group request body
#[derive(Debug, Serialize)]
pub struct GroupRequest {
    pub operation: &'static str,
    pub notification_key_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_key: Option<String>,
    pub registration_ids: Vec<String>,
}

/// Device group response body
///
/// Every response field other than the notification key is ignored.
#[derive(Debug, Deserialize)]
pub struct GroupResponse {
    pub notification_key: String,
}
