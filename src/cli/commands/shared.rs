//! Shared utilities for CLI commands
//!
//! Logging setup, layered configuration, dataset loading with a progress
//! spinner, and small formatting helpers used by every command.

use crate::app::models::IsotopeRecord;
use crate::app::services::nuclide_dataset::{NuclideDataset, Records};
use crate::cli::args::Args;
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nubase_chart={}", log_level)));

    let result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (file -> env -> args)
pub fn load_configuration(
    args: &Args,
    input: Option<&PathBuf>,
    ground_states_only: bool,
) -> Result<Config> {
    let default_config_path = match &args.config_file {
        Some(_) => None,
        None => Config::default_config_path().ok(),
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_deref()
            .filter(|path| path.exists()),
    };

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, input, ground_states_only);
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, input: Option<&PathBuf>, ground_states_only: bool) {
    if let Some(path) = input {
        config.source_path = Some(path.clone());
    }
    // A flag can only switch the restriction on
    if ground_states_only {
        config.ground_states_only = true;
    }
}

/// The NUBASE file named by the configuration
pub fn resolve_source(config: &Config) -> Result<&Path> {
    config.source_path.as_deref().ok_or_else(|| {
        Error::configuration("No NUBASE source given: use --input, a config file or NUBASE_SOURCE")
    })
}

/// Create a simple spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load `path` into a fresh dataset and wait for it to become ready
pub async fn load_dataset(path: &Path, show_progress: bool) -> Result<(NuclideDataset, Records)> {
    let spinner = show_progress.then(|| create_spinner(&format!("Loading {}", path.display())));

    let dataset = NuclideDataset::new(path.display().to_string());
    let ready = dataset.ready();
    let outcome = dataset.load_from_path(path).await;

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    outcome?;

    let records = ready.await?;
    Ok((dataset, records))
}

/// Records to report on, optionally restricted to ground states
pub fn select_records(records: &[IsotopeRecord], ground_states_only: bool) -> Vec<IsotopeRecord> {
    records
        .iter()
        .filter(|r| !ground_states_only || r.is_ground_state())
        .cloned()
        .collect()
}
