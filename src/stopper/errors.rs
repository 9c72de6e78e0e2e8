// 3rd party crates
use thiserror::Error;

// Project imports
use crate::operations::errors::OperationError;
use crate::providers::gce::errors::ComputeError;

#[derive(Debug, Error)]
pub enum StopperError {
    #[error("Encountered error when listing zones of region '{region}': {source}")]
    ListZones {
        region: String,
        #[source]
        source: ComputeError,
    },

    #[error("Encountered error when listing instances in zone '{zone}': {source}")]
    ListInstances {
        zone: String,
        #[source]
        source: ComputeError,
    },

    #[error("Failed to request stop of instance '{instance}' in zone '{zone}': {source}")]
    Stop {
        zone: String,
        instance: String,
        #[source]
        source: ComputeError,
    },

    #[error("Instance '{instance}' in zone '{zone}' did not stop: {source}")]
    Wait {
        zone: String,
        instance: String,
        #[source]
        source: OperationError,
    },
}
