//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON config
//! file, then `NUBASE_*` environment variables. CLI flags are applied last
//! by the command layer.

use crate::app::services::nuclide_dataset::query::validate_bin_decades;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CHART_PADDING, DEFAULT_HISTOGRAM_BIN_DECADES,
    ENV_GROUND_STATES_ONLY, ENV_HISTOGRAM_BIN_DECADES, ENV_SOURCE_PATH,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for loading a NUBASE table and deriving chart views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// NUBASE text file to load
    pub source_path: Option<PathBuf>,

    /// Restrict summaries and exports to ground-state records
    pub ground_states_only: bool,

    /// Width of a half-life histogram bin, in powers of ten
    pub histogram_bin_decades: f64,

    /// Margin added around the Z/N chart extent
    pub chart_padding: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: None,
            ground_states_only: false,
            histogram_bin_decades: DEFAULT_HISTOGRAM_BIN_DECADES,
            chart_padding: DEFAULT_CHART_PADDING,
        }
    }
}

impl Config {
    /// Set the NUBASE source file
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Only consider ground-state records
    pub fn with_ground_states_only(mut self) -> Self {
        self.ground_states_only = true;
        self
    }

    /// Set the histogram bin width in decades
    pub fn with_histogram_bin_decades(mut self, decades: f64) -> Self {
        self.histogram_bin_decades = decades;
        self
    }

    /// Set the chart extent margin
    pub fn with_chart_padding(mut self, padding: u32) -> Self {
        self.chart_padding = padding;
        self
    }

    /// Check that the settings are usable
    ///
    /// # Errors
    /// * Returns `Error::Configuration` if the bin width is not finite or is
    ///   narrower than `MIN_HISTOGRAM_BIN_DECADES`, or the source path is empty
    pub fn validate(&self) -> Result<()> {
        validate_bin_decades(self.histogram_bin_decades)?;

        if let Some(path) = &self.source_path
            && path.as_os_str().is_empty()
        {
            return Err(Error::configuration("source_path must not be empty"));
        }

        Ok(())
    }

    /// `<config dir>/nubase-chart/config.json` for the current user
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Read a JSON config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;

        serde_json::from_str(&text).map_err(|e| {
            Error::serialization(format!("Invalid config file {}", path.display()), e)
        })
    }

    /// Defaults, then `config_file` if given, then the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Reading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply `NUBASE_*` overrides read through `lookup`
    ///
    /// # Errors
    /// * Returns `Error::Configuration` if a numeric or boolean override
    ///   does not parse
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_SOURCE_PATH) {
            debug!("{} override: {}", ENV_SOURCE_PATH, path);
            self.source_path = Some(PathBuf::from(path));
        }

        if let Some(value) = lookup(ENV_HISTOGRAM_BIN_DECADES) {
            self.histogram_bin_decades = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a number, got '{}'",
                    ENV_HISTOGRAM_BIN_DECADES, value
                ))
            })?;
        }

        if let Some(value) = lookup(ENV_GROUND_STATES_ONLY) {
            self.ground_states_only = parse_flag(&value).ok_or_else(|| {
                Error::configuration(format!(
                    "{} must be true/false, got '{}'",
                    ENV_GROUND_STATES_ONLY, value
                ))
            })?;
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
