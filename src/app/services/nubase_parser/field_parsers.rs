//! Field parsing utilities for fixed-width NUBASE lines
//!
//! This module provides helper functions for slicing character columns out of
//! a line and converting the trimmed text into typed values. None of these
//! functions fail: anything that cannot be read yields `None` or an empty
//! string.

use crate::constants::ESTIMATED_SUFFIX;
use std::ops::Range;

/// Byte offset of the `n`th character, clamped to the end of the line
fn char_to_byte(line: &str, n: usize) -> usize {
    if line.is_ascii() {
        return n.min(line.len());
    }
    line.char_indices()
        .nth(n)
        .map_or(line.len(), |(index, _)| index)
}

/// Get the trimmed text of a character column range
///
/// Ranges that extend past the end of the line are clamped; a range that
/// starts past the end yields an empty string.
pub fn column<'a>(line: &'a str, range: Range<usize>) -> &'a str {
    let start = char_to_byte(line, range.start);
    let end = char_to_byte(line, range.end.max(range.start));
    line[start..end].trim()
}

/// Get the trimmed text from a character column to the end of the line
pub fn column_from(line: &str, start: usize) -> &str {
    line[char_to_byte(line, start)..].trim()
}

/// Parse an optional unsigned integer field
pub fn parse_optional_u32(value: &str) -> Option<u32> {
    value.parse::<u32>().ok()
}

/// Parse an optional signed integer field
pub fn parse_optional_i32(value: &str) -> Option<i32> {
    value.parse::<i32>().ok()
}

/// Parse an optional floating-point field
///
/// Parsing is locale independent. Non-finite results (`inf`, `NaN`) are
/// treated as missing.
pub fn parse_optional_f64(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Strip the NUBASE "estimated from systematics" suffix
///
/// Returns the remaining text and whether the suffix was present.
pub fn strip_estimated(value: &str) -> (&str, bool) {
    match value.strip_suffix(ESTIMATED_SUFFIX) {
        Some(rest) => (rest.trim_end(), true),
        None => (value, false),
    }
}

/// Parse a floating-point field that may carry the estimated suffix
pub fn parse_estimated_f64(value: &str) -> (Option<f64>, bool) {
    let (number, estimated) = strip_estimated(value);
    (parse_optional_f64(number), estimated)
}
