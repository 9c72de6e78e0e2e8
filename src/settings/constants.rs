/// Prefix of environment variables overriding settings, e.g.
/// `VMSTOP_WAIT__POLL_INTERVAL=10s`.
pub const ENV_PREFIX: &str = "VMSTOP";

/// Example configuration
pub const EXAMPLE_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Compute API configuration
[api]
endpoint = "https://compute.googleapis.com/compute/v1"
# Leave unset to use Application Default Credentials (gcloud login, the
# GOOGLE_APPLICATION_CREDENTIALS key file, or the VM metadata server).
# A fixed token does not refresh and expires after about an hour.
# access_token = "your_access_token"
request_timeout = "30s"

# Waiting for stop operations
[wait]
# Overall budget per operation
wait_time = "5m"
# Pause between two status polls
poll_interval = "5s"
"#;

pub fn default_log_level() -> String {
    "info".to_string()
}
