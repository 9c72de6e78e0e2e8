// Standard library
use std::time::Duration;

// 3rd party crates
use thiserror::Error;

// Project imports
use crate::models::compute::OperationErrorDetail;
use crate::providers::gce::errors::ComputeError;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Failed to poll operation {name}: {source}")]
    Poll {
        name: String,
        #[source]
        source: ComputeError,
    },

    #[error("Operation {name} completed with error {detail}")]
    Failed {
        name: String,
        #[source]
        detail: OperationErrorDetail,
    },

    #[error("Timed out after {}s while waiting for operation {name}", .waited.as_secs())]
    Timeout { name: String, waited: Duration },
}
