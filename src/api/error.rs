use thiserror::Error;

/// Errors from the backend API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport-level failure (connect, timeout, TLS)
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("server returned {status} for {path}")]
    Status { status: u16, path: String },

    /// Response body was not the JSON shape we expected
    #[error("failed to parse response: {0}")]
    Decode(String),

    /// No route recorded for the requested trip
    #[error("trip {0} has no recorded route")]
    RouteNotFound(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
