// Standard library
use std::path::{Path, PathBuf};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use tracing::{debug, warn};

// Project imports
use crate::stopper::types::Target;

// Current module imports
use super::cli::Cli;
use super::constants::{default_log_level, ENV_PREFIX};
use super::errors::ValidationError;
use super::types::{Log, RunConfig, Settings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    /// Loads the settings from the settings file and environment variables.
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        match config_path {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(path) = Self::default_config_path() {
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        let settings: Config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Determines the default settings file path.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vmstop").join("config.toml"))
    }
}

impl RunConfig {
    /// Merges command-line flags over `settings` and validates the result.
    pub fn new(settings: Settings, cli: Cli) -> Result<Self, ValidationError> {
        let log_level: String = cli
            .log_level
            .map(|level| level.to_lowercase())
            .unwrap_or_else(|| settings.get_log_level());
        match log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(log_level)),
        }

        let project: String =
            non_empty(cli.tenant_project).ok_or(ValidationError::MissingTenantProject)?;

        let target: Target = match (non_empty(cli.zone), non_empty(cli.region)) {
            (Some(zone), Some(region)) => {
                warn!(
                    zone = %zone,
                    region = %region,
                    "Both zone and region are set, only zone {} is used",
                    zone
                );
                Target::Zone(zone)
            }
            (Some(zone), None) => Target::Zone(zone),
            (None, Some(region)) => Target::Region(region),
            (None, None) => return Err(ValidationError::MissingTarget),
        };

        let mut wait = settings.wait;
        if let Some(wait_time) = cli.wait_time {
            wait.wait_time = wait_time;
        }
        if wait.wait_time.is_zero() {
            return Err(ValidationError::InvalidWaitTime);
        }
        if wait.poll_interval.is_zero() {
            return Err(ValidationError::InvalidPollInterval);
        }

        let mut api = settings.api;
        if let Some(token) = non_empty(cli.access_token) {
            api.access_token = token;
        }
        if !(api.endpoint.starts_with("https://") || api.endpoint.starts_with("http://")) {
            return Err(ValidationError::InvalidEndpoint(api.endpoint));
        }

        debug!(
            project = %project,
            target = %target,
            wait_time = ?wait.wait_time,
            poll_interval = ?wait.poll_interval,
            "Run configuration validated"
        );

        Ok(RunConfig {
            project,
            target,
            wait,
            api,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
