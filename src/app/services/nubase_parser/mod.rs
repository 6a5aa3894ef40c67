//! Fixed-width parser for NUBASE nuclear-data tables
//!
//! This module turns the raw NUBASE text into one [`IsotopeRecord`] per data
//! line. Fields are read from fixed character columns, never by splitting on
//! whitespace, because several columns legitimately contain embedded spaces.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Column slicing and numeric field helpers
//! - [`half_life`] - Half-life sentinel handling and unit normalisation
//! - [`record_parser`] - One line to one record
//! - [`parser`] - Whole-source orchestration (header and blank lines)
//! - [`stats`] - Parsing statistics and result structures
//!
//! Parsing is total: short or malformed lines produce records with missing
//! fields, never errors.
//!
//! ## Usage
//!
//! ```rust
//! use nubase_chart::app::services::nubase_parser::parse_source;
//!
//! let text = "header\n001 0000   1n     8071.3171  0.0005                         613.9    s  0.6";
//! let result = parse_source(text);
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].half_life_seconds(), Some(613.9));
//! ```
//!
//! [`IsotopeRecord`]: crate::app::models::IsotopeRecord

pub mod field_parsers;
pub mod half_life;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use half_life::{NormalisedHalfLife, normalise_half_life};
pub use parser::{data_lines, parse_source};
pub use record_parser::parse_line;
pub use stats::{ParseResult, ParseStats};
