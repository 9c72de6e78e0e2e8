// Standard library
use std::sync::Arc;

// 3rd party crates
use async_trait::async_trait;
use gcp_auth::TokenProvider;
use tracing::{debug, info};

// Current module imports
use super::constants::{ACCESS_TOKEN_PLACEHOLDER, CLOUD_PLATFORM_SCOPE};
use super::errors::ComputeError;
use super::types::GceConfig;

/// Source of the OAuth2 access token sent with each compute API request.
///
/// The token is asked for on every request, so a source that refreshes
/// expiring credentials keeps long runs authenticated.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String, ComputeError>;
}

/// A fixed token passed in by the operator.
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn access_token(&self) -> Result<String, ComputeError> {
        Ok(self.token.clone())
    }
}

/// Application Default Credentials: the `gcloud` login, the key file named by
/// `GOOGLE_APPLICATION_CREDENTIALS`, or the metadata server of the VM.
pub struct DefaultCredentials {
    provider: Arc<dyn TokenProvider>,
}

impl DefaultCredentials {
    pub async fn discover() -> Result<Self, ComputeError> {
        let provider: Arc<dyn TokenProvider> = gcp_auth::provider().await?;
        Ok(Self { provider })
    }
}

#[async_trait]
impl TokenSource for DefaultCredentials {
    async fn access_token(&self) -> Result<String, ComputeError> {
        // gcp_auth caches the token and refreshes it shortly before expiry.
        let token = self.provider.token(&[CLOUD_PLATFORM_SCOPE]).await?;
        Ok(token.as_str().to_string())
    }
}

/// Token configured through `--access_token`, the environment or the
/// settings file. Blank values and the example placeholder count as unset.
pub fn configured_token(config: &GceConfig) -> Option<String> {
    let token: &str = config.access_token.trim();
    if token.is_empty() || token == ACCESS_TOKEN_PLACEHOLDER {
        None
    } else {
        Some(token.to_string())
    }
}

/// Picks the configured token when there is one, otherwise discovers
/// Application Default Credentials.
pub async fn token_source(config: &GceConfig) -> Result<Arc<dyn TokenSource>, ComputeError> {
    match configured_token(config) {
        Some(token) => {
            debug!("Using the configured access token");
            Ok(Arc::new(StaticToken::new(token)))
        }
        None => {
            info!("No access token configured, using Application Default Credentials");
            Ok(Arc::new(DefaultCredentials::discover().await?))
        }
    }
}
