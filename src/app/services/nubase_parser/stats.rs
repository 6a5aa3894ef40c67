//! Parsing statistics and result structures for NUBASE processing
//!
//! This module provides types for tracking how the lines of a source were
//! classified and how many records ended up stable, timed or unknown.

use crate::app::models::{HalfLife, IsotopeRecord};
use std::collections::BTreeMap;

use super::half_life::is_unrecognised_unit;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records in file order
    pub records: Vec<IsotopeRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of physical lines seen, header included
    pub total_lines: usize,

    /// Number of records produced
    pub records_parsed: usize,

    /// Number of empty or whitespace-only lines skipped
    pub blank_lines_skipped: usize,

    /// Records marked stable
    pub stable_records: usize,

    /// Records with a half-life in seconds
    pub timed_records: usize,

    /// Records whose half-life is unknown
    pub unknown_half_life: usize,

    /// Occurrences of each unit code missing from the conversion table
    pub unrecognised_units: BTreeMap<String, usize>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one parsed record
    pub fn record(&mut self, record: &IsotopeRecord) {
        self.records_parsed += 1;
        match record.half_life {
            HalfLife::Stable => self.stable_records += 1,
            HalfLife::Seconds(_) => self.timed_records += 1,
            HalfLife::Unknown => {
                self.unknown_half_life += 1;
                if is_unrecognised_unit(&record.half_life_unit) {
                    *self
                        .unrecognised_units
                        .entry(record.half_life_unit.clone())
                        .or_insert(0) += 1;
                }
            }
        }
    }

    /// Percentage of records with a numeric half-life
    pub fn timed_rate(&self) -> f64 {
        if self.records_parsed == 0 {
            0.0
        } else {
            (self.timed_records as f64 / self.records_parsed as f64) * 100.0
        }
    }

    pub fn has_unrecognised_units(&self) -> bool {
        !self.unrecognised_units.is_empty()
    }

    /// Get a summary string of the parse
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} records from {} lines: {} stable, {} timed ({:.1}%), {} unknown",
            self.records_parsed,
            self.total_lines,
            self.stable_records,
            self.timed_records,
            self.timed_rate(),
            self.unknown_half_life
        )
    }
}
