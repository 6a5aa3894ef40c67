//! NUBASE Chart Library
//!
//! A Rust library for turning the fixed-width NUBASE nuclear-data table into
//! typed isotope records for chart-of-nuclides and half-life distribution
//! consumers.
//!
//! This library provides tools for:
//! - Parsing NUBASE lines by fixed character columns into `IsotopeRecord`s
//! - Normalising half-lives to seconds, with stable and unknown entries kept apart
//! - Holding the parsed table in a load-once dataset that notifies subscribers
//! - Derived read-only views (half-life domain, chart extents, histograms)

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod nubase_parser;
        pub mod nuclide_dataset;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{HalfLife, HalfLifeBound, IsotopeRecord};
pub use app::services::nuclide_dataset::NuclideDataset;
pub use config::Config;

/// Result type alias for the NUBASE chart crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset loading, configuration and output
///
/// Parsing itself never fails: malformed lines produce records with missing
/// fields instead of errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset accessed before its source text was loaded
    #[error("Dataset '{source_label}' is not loaded yet")]
    NotLoaded { source_label: String },

    /// Dataset loaded a second time
    #[error("Dataset '{source_label}' is already loaded")]
    AlreadyLoaded { source_label: String },

    /// Every handle to the dataset was dropped before it was loaded
    #[error("Dataset was dropped before loading completed")]
    DatasetDropped,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON (de)serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a not-loaded error for the named source
    pub fn not_loaded(source_label: impl Into<String>) -> Self {
        Self::NotLoaded {
            source_label: source_label.into(),
        }
    }

    /// Create an already-loaded error for the named source
    pub fn already_loaded(source_label: impl Into<String>) -> Self {
        Self::AlreadyLoaded {
            source_label: source_label.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
