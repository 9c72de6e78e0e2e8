// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

/// Custom error type for compute API calls.
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Failed to obtain an access token: {0}")]
    Auth(#[from] gcp_auth::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Compute API returned HTTP {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Failed to parse response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ComputeError {
    /// HTTP status of the failed call, when the API answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ComputeError::Api { status, .. } => Some(*status),
            ComputeError::Http(e) => e.status(),
            _ => None,
        }
    }
}
