// Standard library
use std::time::Duration;

pub const COMPUTE_API_BASE: &str = "https://compute.googleapis.com/compute/v1";

/// Per-request timeout applied to every compute API call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OAuth2 scope requested from Application Default Credentials.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Placeholder shipped in example configuration files.
pub const ACCESS_TOKEN_PLACEHOLDER: &str = "your_access_token";

pub fn default_endpoint() -> String {
    COMPUTE_API_BASE.to_string()
}

pub fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}
