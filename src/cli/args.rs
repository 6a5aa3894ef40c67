//! Command-line argument definitions for the NUBASE chart tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the NUBASE chart tool
///
/// Loads a NUBASE fixed-width table and reports on it or exports the parsed
/// isotope records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nubase-chart",
    version,
    about = "Parse NUBASE nuclear data tables and summarise isotope half-lives",
    long_about = "Reads the fixed-width NUBASE table, normalises every half-life to \
                  seconds and reports the data a chart of nuclides needs: stable, \
                  timed and unknown counts, the half-life range, the Z/N extent and \
                  a log-scale half-life histogram. Records can also be exported as JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// <config dir>/nubase-chart/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Summarise a NUBASE table
    Summary(SummaryArgs),
    /// Export parsed records as JSON
    Export(ExportArgs),
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// NUBASE text file
    ///
    /// Falls back to `source_path` from the config file or NUBASE_SOURCE.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "NUBASE text file to load"
    )]
    pub input: Option<PathBuf>,

    /// Only consider ground-state records
    #[arg(long = "ground-states-only", help = "Ignore isomers")]
    pub ground_states_only: bool,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the summary"
    )]
    pub format: OutputFormat,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// NUBASE text file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "NUBASE text file to load"
    )]
    pub input: Option<PathBuf>,

    /// Output file; stdout if not specified
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Write JSON records to FILE"
    )]
    pub output_file: Option<PathBuf>,

    /// Only export ground-state records
    #[arg(long = "ground-states-only", help = "Ignore isomers")]
    pub ground_states_only: bool,

    /// Emit compact single-line JSON
    #[arg(long = "compact", help = "Emit compact JSON")]
    pub compact: bool,
}

/// Output format options for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file
            && !config_file.is_file()
        {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                config_file.display()
            )));
        }

        match &self.command {
            Some(Commands::Summary(summary)) => validate_input(summary.input.as_ref()),
            Some(Commands::Export(export)) => {
                validate_input(export.input.as_ref())?;
                if let Some(parent) = export.output_file.as_ref().and_then(|p| p.parent())
                    && !parent.as_os_str().is_empty()
                    && !parent.exists()
                {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
                Ok(())
            }
            None => Ok(()),
        }
    }
}

fn validate_input(input: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = input
        && !path.is_file()
    {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            path.display()
        )));
    }
    Ok(())
}
