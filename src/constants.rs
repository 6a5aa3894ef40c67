//! Application constants for the NUBASE chart crate
//!
//! This module contains the fixed-width column layout of the NUBASE table,
//! the half-life unit conversion table, sentinel tokens and configuration
//! defaults used throughout the crate.

use std::ops::Range;

// =============================================================================
// NUBASE Column Layout
// =============================================================================

/// Character column ranges (0-indexed, end-exclusive) of the NUBASE2016 layout
///
/// Ranges are character offsets, not byte offsets. A range that starts past
/// the end of a line yields an empty field.
pub mod columns {
    use super::Range;

    pub const MASS_NUMBER: Range<usize> = 0..3;
    pub const ATOMIC_NUMBER: Range<usize> = 4..7;
    pub const LEVEL_CODE: Range<usize> = 7..9;
    pub const ELEMENT: Range<usize> = 11..17;
    pub const MASS_EXCESS: Range<usize> = 18..29;
    pub const MASS_EXCESS_UNCERTAINTY: Range<usize> = 29..38;
    pub const EXCITATION_ENERGY: Range<usize> = 38..48;
    pub const EXCITATION_ENERGY_UNCERTAINTY: Range<usize> = 48..56;
    pub const EXCITATION_ENERGY_ORIGIN: Range<usize> = 56..60;
    pub const HALF_LIFE_VALUE: Range<usize> = 60..69;
    pub const HALF_LIFE_UNIT: Range<usize> = 69..71;
    pub const HALF_LIFE_UNCERTAINTY: Range<usize> = 72..78;
    pub const SPIN_PARITY: Range<usize> = 79..92;
    pub const ENSDF_YEAR: Range<usize> = 93..95;
    pub const REFERENCE: Range<usize> = 96..103;
    pub const DISCOVERY_YEAR: Range<usize> = 104..109;

    /// Decay modes run from this column to the end of the line
    pub const DECAY_MODES_START: usize = 110;
}

// =============================================================================
// Half-life Sentinels and Markers
// =============================================================================

/// Half-life value marking a stable nuclide
pub const STABLE_TOKEN: &str = "stbl";

/// Half-life unit code meaning "not applicable"; treated as unknown without a diagnostic
pub const NOT_APPLICABLE_UNIT: &str = "n";

/// Suffix NUBASE appends to values estimated from systematics
pub const ESTIMATED_SUFFIX: char = '#';

/// Level code of a ground state
pub const GROUND_STATE_LEVEL: u8 = 0;

// =============================================================================
// Half-life Unit Conversion
// =============================================================================

/// Seconds in a Julian year (365.25 days), the reference year length
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;

/// Seconds per half-life unit code
///
/// `m`, `h` and `d` are minute, hour and day. Year multiples are powers of
/// a thousand of the Julian year.
pub const HALF_LIFE_UNITS: &[(&str, f64)] = &[
    ("ys", 1e-24),
    ("zs", 1e-21),
    ("as", 1e-18),
    ("fs", 1e-15),
    ("ps", 1e-12),
    ("ns", 1e-9),
    ("us", 1e-6),
    ("ms", 1e-3),
    ("s", 1.0),
    ("m", 60.0),
    ("h", 3_600.0),
    ("d", 86_400.0),
    ("y", SECONDS_PER_YEAR),
    ("ky", SECONDS_PER_YEAR * 1e3),
    ("My", SECONDS_PER_YEAR * 1e6),
    ("Gy", SECONDS_PER_YEAR * 1e9),
    ("Ty", SECONDS_PER_YEAR * 1e12),
    ("Py", SECONDS_PER_YEAR * 1e15),
    ("Ey", SECONDS_PER_YEAR * 1e18),
    ("Yy", SECONDS_PER_YEAR * 1e21),
    ("Zy", SECONDS_PER_YEAR * 1e24),
];

/// Look up the seconds-per-unit multiplier for a half-life unit code
///
/// Unit codes are case sensitive (`ms` is milliseconds, `My` is megayears).
pub fn unit_multiplier(unit: &str) -> Option<f64> {
    HALF_LIFE_UNITS
        .iter()
        .find(|(code, _)| *code == unit)
        .map(|(_, factor)| *factor)
}

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Environment variable naming the NUBASE source file
pub const ENV_SOURCE_PATH: &str = "NUBASE_SOURCE";

/// Environment variable overriding the histogram bin width (decades)
pub const ENV_HISTOGRAM_BIN_DECADES: &str = "NUBASE_HISTOGRAM_BIN_DECADES";

/// Environment variable restricting views to ground states
pub const ENV_GROUND_STATES_ONLY: &str = "NUBASE_GROUND_STATES_ONLY";

/// Default width of a half-life histogram bin, in powers of ten
pub const DEFAULT_HISTOGRAM_BIN_DECADES: f64 = 1.0;

/// Narrowest accepted histogram bin, in powers of ten
pub const MIN_HISTOGRAM_BIN_DECADES: f64 = 1e-3;

/// Largest number of bins a half-life histogram may span
pub const MAX_HISTOGRAM_BINS: usize = 10_000;

/// Default margin added around the Z/N chart extent
pub const DEFAULT_CHART_PADDING: u32 = 1;

/// Application directory name used under the user's config directory
pub const CONFIG_DIR_NAME: &str = "nubase-chart";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";
