// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Please specify the tenant project")]
    MissingTenantProject,
    #[error("Please specify a valid zone or region")]
    MissingTarget,
    #[error("Invalid compute API endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Wait time must be greater than 0")]
    InvalidWaitTime,
    #[error("Poll interval must be greater than 0")]
    InvalidPollInterval,
}
