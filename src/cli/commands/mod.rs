//! Command implementations for the NUBASE chart CLI
//!
//! Each command lives in its own module; this module sets up logging and
//! dispatches on the parsed arguments.

pub mod export;
pub mod shared;
pub mod summary;

use crate::app::services::nuclide_dataset::DatasetMetadata;
use crate::cli::args::{Args, Commands};
use crate::{Error, Result};
use tracing::{debug, info};

/// Main command runner
///
/// Returns the metadata of the dataset the command loaded.
pub async fn run(args: Args) -> Result<DatasetMetadata> {
    shared::setup_logging(&args)?;

    info!("Starting NUBASE chart tool");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    match &args.command {
        Some(Commands::Summary(summary)) => summary::run_summary(&args, summary).await,
        Some(Commands::Export(export)) => export::run_export(&args, export).await,
        None => Err(Error::configuration("No command given")),
    }
}
