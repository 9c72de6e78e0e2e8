// Standard library
use std::time::Duration;

// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{default_poll_interval, default_wait_time};

/// How long to wait for an operation and how often to poll it.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    #[serde(default = "default_wait_time", with = "humantime_serde")]
    pub wait_time: Duration,
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            wait_time: default_wait_time(),
            poll_interval: default_poll_interval(),
        }
    }
}
