// Standard library
use std::path::PathBuf;
use std::time::Duration;

// 3rd party crates
use clap::Parser;

/// Stop every VM instance of a zone, or of all zones of a region, waiting
/// for each stop to complete before moving on to the next instance.
#[derive(Debug, Parser)]
#[command(name = "vmstop", version)]
pub struct Cli {
    /// The tenant project.
    #[arg(long = "tenant_project", env = "VMSTOP_TENANT_PROJECT")]
    pub tenant_project: Option<String>,

    /// The instance zone.
    #[arg(long, env = "VMSTOP_ZONE")]
    pub zone: Option<String>,

    /// The enterprise instance region; all of its zones are stopped.
    #[arg(long, env = "VMSTOP_REGION")]
    pub region: Option<String>,

    /// Wait time for each cloud operation, e.g. "5m" or "90s" [default: 5m].
    #[arg(long = "wait_time", value_parser = humantime::parse_duration)]
    pub wait_time: Option<Duration>,

    /// OAuth2 access token for the compute API [default: Application Default
    /// Credentials].
    #[arg(
        long = "access_token",
        env = "GOOGLE_OAUTH_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// Log level: error, warn, info, debug or trace.
    #[arg(long = "log_level")]
    pub log_level: Option<String>,

    /// Settings file [default: <config dir>/vmstop/config.toml].
    #[arg(long, env = "VMSTOP_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Print an example settings file and exit.
    #[arg(long = "example_config")]
    pub example_config: bool,
}
