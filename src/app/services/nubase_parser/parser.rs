//! Whole-source NUBASE parsing
//!
//! This module splits a complete NUBASE text into lines, drops the header and
//! blank lines, and parses every remaining line with [`parse_line`].

use tracing::{debug, info, warn};

use super::record_parser::parse_line;
use super::stats::{ParseResult, ParseStats};

/// Split source text into data lines
///
/// Line terminators may be `\n`, `\r` or `\r\n`. The first line is the
/// header and is always dropped, as are empty and whitespace-only lines.
/// Returns the data lines together with the number of physical lines and the
/// number of blank lines skipped.
pub fn data_lines(source_text: &str) -> (Vec<&str>, usize, usize) {
    let mut lines = source_text
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']));

    let mut total_lines = 0;
    let mut blank_lines = 0;
    let mut data = Vec::new();

    if lines.next().is_some() {
        total_lines += 1;
    }

    for line in lines {
        total_lines += 1;
        if line.trim().is_empty() {
            blank_lines += 1;
        } else {
            data.push(line);
        }
    }

    (data, total_lines, blank_lines)
}

/// Parse a complete NUBASE source text
///
/// Records come back in file order, one per non-empty, non-header line.
pub fn parse_source(source_text: &str) -> ParseResult {
    let (lines, total_lines, blank_lines) = data_lines(source_text);
    debug!(
        "Split source into {} data lines ({} physical, {} blank)",
        lines.len(),
        total_lines,
        blank_lines
    );

    let mut stats = ParseStats {
        total_lines,
        blank_lines_skipped: blank_lines,
        ..ParseStats::new()
    };

    let records: Vec<_> = lines
        .into_iter()
        .map(|line| {
            let record = parse_line(line);
            stats.record(&record);
            record
        })
        .collect();

    if stats.has_unrecognised_units() {
        warn!(
            "Half-life units not in the conversion table: {:?}",
            stats.unrecognised_units
        );
    }
    info!("{}", stats.summary());

    ParseResult { records, stats }
}
