use thiserror::Error;

/// Device Group Client Error Types
#[derive(Error, Debug)]
pub enum GroupError {
    /// Transport-level failure, surfaced verbatim from the HTTP layer
    #[error("device group request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("FCM service is unavailable ({0})")]
    ServiceUnavailable(u16),

    #[error("unauthorized, check api_key and sender_id")]
    Unauthorized,

    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    #[error("failed to parse device group response: {0}")]
    ResponseParse(String),
}

impl GroupError {
    /// HTTP status behind this error, when there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            GroupError::ServiceUnavailable(code) | GroupError::UnexpectedStatus(code) => {
                Some(*code)
            }
            GroupError::Unauthorized => Some(401),
            GroupError::Transport(err) => err.status().map(|status| status.as_u16()),
            GroupError::ResponseParse(_) => None,
        }
    }
}
