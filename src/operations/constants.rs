// Standard library
use std::time::Duration;

/// Overall budget for a single operation to reach `DONE`.
pub const DEFAULT_WAIT_TIME: Duration = Duration::from_secs(5 * 60);

/// Pause between two status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

pub fn default_wait_time() -> Duration {
    DEFAULT_WAIT_TIME
}

pub fn default_poll_interval() -> Duration {
    DEFAULT_POLL_INTERVAL
}
