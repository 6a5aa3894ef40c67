//! Dataset loading from source text or files
//!
//! This module handles the single fetch-and-parse step of a dataset: reading
//! the NUBASE text, parsing it, and publishing the frozen records to waiting
//! subscribers.

use super::NuclideDataset;
use super::metadata::DatasetMetadata;
use crate::app::services::nubase_parser::parse_source;
use crate::{Error, Result};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl NuclideDataset {
    /// Parse `source_text` and freeze it as this dataset's records
    ///
    /// The first line is treated as a header. Queued `on_ready` callbacks run
    /// in registration order before this method returns.
    ///
    /// # Errors
    /// * Returns `Error::AlreadyLoaded` if a load has already been started;
    ///   the existing records are left untouched
    pub fn load(&self, source_text: &str) -> Result<DatasetMetadata> {
        self.begin_load()?;

        info!(
            "Loading NUBASE dataset '{}' ({} bytes)",
            self.source_label(),
            source_text.len()
        );

        let start_time = Instant::now();
        let result = parse_source(source_text);
        let parse_duration = start_time.elapsed();

        let metadata = DatasetMetadata {
            source_label: self.source_label().to_string(),
            source_bytes: source_text.len(),
            parse_duration,
            stats: result.stats,
        };

        info!("{}", metadata.summary());

        self.publish(result.records.into(), metadata.clone());
        Ok(metadata)
    }

    /// Read a NUBASE file and load it
    ///
    /// # Errors
    /// * Returns `Error::Io` if the file cannot be read; nothing is retried and
    ///   the dataset stays unloaded
    /// * Returns `Error::AlreadyLoaded` if a load has already been started,
    ///   without reading the file
    pub async fn load_from_path(&self, path: &Path) -> Result<DatasetMetadata> {
        if self.load_claimed() {
            return Err(Error::already_loaded(self.source_label()));
        }

        debug!("Reading NUBASE source: {}", path.display());
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

        self.load(&text)
    }

    /// Create a dataset labelled with `path` and load it from that file
    pub async fn open(path: &Path) -> Result<Self> {
        let dataset = Self::new(path.display().to_string());
        dataset.load_from_path(path).await?;
        Ok(dataset)
    }
}
