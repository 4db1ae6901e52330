use std::time::Duration;

use thiserror::Error;

/// Shown by either view when the backend answers 401.
pub const AUTH_ERROR_MESSAGE: &str = "Authentication error. Please log in again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not authorized (401)")]
    Unauthorized,
    #[error("server returned status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Parse(String),
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// The two resources a view can fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile,
    TopArtists,
}

impl Resource {
    /// Generic copy for any failure other than 401.
    pub fn failure_message(self) -> &'static str {
        match self {
            Resource::Profile => "Failed to fetch user profile",
            Resource::TopArtists => "Failed to fetch tracks",
        }
    }
}

impl ApiError {
    /// Message the view displays for this error.
    ///
    /// Only 401 gets its own copy. Body parse failures surface their detail;
    /// transport failures, timeouts and other statuses share the generic text.
    pub fn view_message(&self, resource: Resource) -> String {
        match self {
            ApiError::Unauthorized => AUTH_ERROR_MESSAGE.to_string(),
            ApiError::Parse(_) => self.to_string(),
            ApiError::Network(_) | ApiError::Status(_) | ApiError::Timeout(_) => {
                resource.failure_message().to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ApiError::from_status(status.as_u16());
        }
        if err.is_decode() {
            return ApiError::Parse(err.to_string());
        }
        ApiError::Network(err.to_string())
    }
}

impl ApiError {
    pub(crate) fn from_status(status: u16) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status(status)
        }
    }
}
