// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

// Current module imports
use super::auth::TokenSource;
use super::constants::{default_endpoint, default_request_timeout};

/// Represents a client for interacting with the Compute Engine API.
#[derive(Clone)]
pub struct GceClient {
    pub config: GceConfig,
    pub client: Client,
    pub tokens: Arc<dyn TokenSource>,
}

/// Configuration for Compute Engine API interactions.
#[derive(Debug, Deserialize, Clone)]
pub struct GceConfig {
    /// Base URL of the compute v1 API, without a trailing slash.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// OAuth2 bearer token sent with every request. When empty, Application
    /// Default Credentials are used instead.
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

/// Error envelope returned by Google APIs on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorResponseBody,
}

/// Details of the error envelope.
#[derive(Debug, Deserialize)]
pub struct ErrorResponseBody {
    #[serde(default)]
    pub message: String,
}
