//! Export command implementation
//!
//! Writes the parsed isotope records as a JSON array, to a file or stdout.

use super::shared::{load_configuration, load_dataset, resolve_source, select_records};
use crate::app::models::IsotopeRecord;
use crate::app::services::nuclide_dataset::DatasetMetadata;
use crate::cli::args::{Args, ExportArgs};
use crate::{Error, Result};
use tracing::info;

/// Export command runner
pub async fn run_export(args: &Args, export: &ExportArgs) -> Result<DatasetMetadata> {
    let config = load_configuration(args, export.input.as_ref(), export.ground_states_only)?;
    let source = resolve_source(&config)?;

    // Spinner output would interleave with JSON on stdout
    let show_progress = args.show_progress() && export.output_file.is_some();
    let (dataset, records) = load_dataset(source, show_progress).await?;

    let selected = select_records(&records, config.ground_states_only);
    let json = records_to_json(&selected, !export.compact)?;

    match &export.output_file {
        Some(path) => {
            tokio::fs::write(path, &json)
                .await
                .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
            info!("Exported {} records to {}", selected.len(), path.display());
        }
        None => println!("{}", json),
    }

    dataset.metadata()
}

/// Serialize records as a JSON array
pub fn records_to_json(records: &[IsotopeRecord], pretty: bool) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    result.map_err(|e| Error::serialization("Failed to serialize isotope records", e))
}
