// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::operations::types::WaitPolicy;
use crate::providers::gce::types::GceConfig;
use crate::stopper::types::Target;

// Current module imports
use super::constants::default_log_level;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Contents of the settings file, merged with environment overrides.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub api: GceConfig,
    #[serde(default)]
    pub wait: WaitPolicy,
}

/// Validated, immutable configuration of one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub project: String,
    pub target: Target,
    pub wait: WaitPolicy,
    pub api: GceConfig,
}
