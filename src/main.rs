// Standard library
use std::error::Error;
use std::process::ExitCode;

// 3rd party crates
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod models;
mod operations;
mod providers;
mod settings;
mod stopper;
#[cfg(test)]
mod testing;

// Project imports
use crate::providers::gce::types::GceClient;
use crate::settings::cli::Cli;
use crate::settings::constants::EXAMPLE_CONFIG;
use crate::settings::types::{RunConfig, Settings};
use crate::stopper::functions::stop_all;
use crate::stopper::types::ZoneSummary;

/// Main entry point of the VM stopper.
/// Stops every instance of a zone, or of all zones of a region, one at a
/// time, waiting for each stop operation to finish before the next.
///
/// Features:
/// - Zone resolution from a region with paginated listing
/// - Polling of zonal, regional and global operations
/// - Retry of transient "service unavailable" answers while polling
/// - Bounded wait per operation
/// - Settings file, environment and command-line configuration
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli: Cli = Cli::parse();

    if cli.example_config {
        println!("{}", EXAMPLE_CONFIG.trim_start());
        return ExitCode::SUCCESS;
    }

    let settings: Settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            init_logging("error");
            error!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    let log_level: String = cli
        .log_level
        .clone()
        .unwrap_or_else(|| settings.get_log_level());
    init_logging(&log_level);

    let config: RunConfig = match RunConfig::new(settings, cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration validation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("⚙️ Settings have been loaded.");

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Installs the fmt subscriber, keeping the HTTP stack quiet.
fn init_logging(level: &str) {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(format!(
            "{},hyper_util=error,reqwest=error,hyper=error",
            level.to_lowercase()
        ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();
}

/// Resolves the target zones and stops every instance in them.
///
/// This function:
/// - Builds the authenticated compute API client
/// - Lists the zones of the region when no zone is given
/// - Stops the instances of each zone in order, aborting on the first failure
async fn run(config: &RunConfig) -> Result<(), Box<dyn Error>> {
    info!(
        project = %config.project,
        target = %config.target,
        "🕰️ Waiting up to {}s for each stop operation",
        config.wait.wait_time.as_secs()
    );

    let client: GceClient = GceClient::connect(config.api.clone()).await?;
    let summaries: Vec<ZoneSummary> = stop_all(&client, config).await?;

    let total: usize = summaries.iter().map(|summary| summary.stopped).sum();
    for summary in &summaries {
        info!(
            zone = %summary.zone,
            count = summary.stopped,
            "Stopped {} instances",
            summary.stopped
        );
    }
    info!(
        "Stopped {} instances across {} zones.",
        total,
        summaries.len()
    );

    Ok(())
}
