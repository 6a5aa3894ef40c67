//! Dataset load metadata and statistics tracking
//!
//! This module defines the data structures recorded once a dataset has been
//! loaded: where the text came from, how long parsing took, and how the lines
//! were classified.

use crate::app::services::nubase_parser::ParseStats;
use std::time::Duration;

/// Metadata about a completed dataset load
#[derive(Debug, Clone)]
pub struct DatasetMetadata {
    /// Label of the loaded source (usually a file path)
    pub source_label: String,

    /// Size of the source text in bytes
    pub source_bytes: usize,

    /// Time taken to parse the source text
    pub parse_duration: Duration,

    /// Line and half-life classification counts
    pub stats: ParseStats,
}

impl DatasetMetadata {
    /// Calculate the parsing rate in records per second
    pub fn parsing_rate(&self) -> f64 {
        if self.parse_duration.is_zero() {
            0.0
        } else {
            self.stats.records_parsed as f64 / self.parse_duration.as_secs_f64()
        }
    }

    /// Get a summary string of the load
    pub fn summary(&self) -> String {
        format!(
            "Loaded '{}' ({} bytes): {} in {:.3}s",
            self.source_label,
            self.source_bytes,
            self.stats.summary(),
            self.parse_duration.as_secs_f64()
        )
    }
}
