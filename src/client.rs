use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::GroupConfig;
use crate::errors::GroupError;
use crate::models::{GroupOperation, GroupResponse};

/// FCM device group management endpoint
pub const DEVICE_GROUP_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/notification";

/// FCM Device Group Client
///
/// Manages named device groups on FCM's legacy notification endpoint:
/// create a group of registration tokens, add members, remove members.
/// Holds only immutable credentials after construction, so a single
/// instance can serve concurrent calls without coordination.
pub struct GroupClient {
    pub options: GroupConfig,
    endpoint: String,
    http_client: reqwest::Client,
}

impl GroupClient {
    /// Create a new device group client
    ///
    /// Missing credentials are tolerated here; FCM rejects the requests
    /// with 401 instead.
    pub fn new(options: GroupConfig) -> Self {
        if options.api_key.is_none() || options.sender_id.is_none() {
            warn!("missing api_key or sender_id, FCM will reject group requests");
        }

        Self {
            options,
            endpoint: DEVICE_GROUP_ENDPOINT.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Override the device group endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Authorization headers for the device group endpoint
    ///
    /// Pure function of the credentials: `Authorization: key=<apiKey>` plus
    /// `project_id: <senderId>`, with unset credentials rendered as empty
    /// strings. A credential that is not a valid header value is omitted
    /// and left for FCM to reject.
    pub fn headers(&self) -> HeaderMap {
        let api_key = self.options.api_key.as_deref().unwrap_or_default();
        let sender_id = self.options.sender_id.as_deref().unwrap_or_default();

        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&format!("key={}", api_key)) {
            headers.insert(AUTHORIZATION, value);
        }
        if let Ok(value) = HeaderValue::from_str(sender_id) {
            headers.insert(HeaderName::from_static("project_id"), value);
        }
        headers
    }

    /// Create a device group named `name`, seeded with `registration_ids`
    ///
    /// Returns the notification key FCM assigns to the group.
    pub async fn create_device_group(
        &self,
        name: &str,
        registration_ids: Option<Vec<String>>,
    ) -> Result<String, GroupError> {
        self.send(GroupOperation::Create {
            name: name.to_string(),
            registration_ids,
        })
        .await
    }

    /// Add `registration_ids` to the group identified by `key`
    pub async fn add_device_to_group(
        &self,
        name: &str,
        key: &str,
        registration_ids: Option<Vec<String>>,
    ) -> Result<String, GroupError> {
        self.send(GroupOperation::Add {
            name: name.to_string(),
            key: key.to_string(),
            registration_ids,
        })
        .await
    }

    /// Remove `registration_ids` from the group identified by `key`
    pub async fn remove_device_from_group(
        &self,
        name: &str,
        key: &str,
        registration_ids: Option<Vec<String>>,
    ) -> Result<String, GroupError> {
        self.send(GroupOperation::Remove {
            name: name.to_string(),
            key: key.to_string(),
            registration_ids,
        })
        .await
    }

    /// Send one group operation and map the response
    ///
    /// Exactly one outcome per call: the group's notification key on 200,
    /// or one error carrying the transport failure or the status code.
    /// No retry is performed on any path.
    pub async fn send(&self, operation: GroupOperation) -> Result<String, GroupError> {
        let payload = operation.into_request();

        let response = self
            .http_client
            .post(&self.endpoint)
            .headers(self.headers())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            debug!(status = status.as_u16(), "FCM service is unavailable");
            return Err(GroupError::ServiceUnavailable(status.as_u16()));
        }
        if status == StatusCode::UNAUTHORIZED {
            debug!("unauthorized, check api_key and sender_id");
            return Err(GroupError::Unauthorized);
        }
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(
                status = status.as_u16(),
                body = %body,
                "unexpected device group response"
            );
            return Err(GroupError::UnexpectedStatus(status.as_u16()));
        }

        let body: GroupResponse = response
            .json()
            .await
            .map_err(|e| GroupError::ResponseParse(e.to_string()))?;

        Ok(body.notification_key)
    }
}
