//! Half-life normalisation
//!
//! Converts the half-life value and unit columns into seconds using the
//! fixed unit table in [`crate::constants::HALF_LIFE_UNITS`], keeping the
//! stability sentinel and unknown values apart from real numbers.

use super::field_parsers::{parse_optional_f64, strip_estimated};
use crate::app::models::{HalfLife, HalfLifeBound};
use crate::constants::{NOT_APPLICABLE_UNIT, STABLE_TOKEN, unit_multiplier};
use tracing::warn;

/// Result of normalising one half-life value/unit pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalisedHalfLife {
    pub half_life: HalfLife,
    pub bound: Option<HalfLifeBound>,
    /// Magnitude parsed from the value column, before unit conversion
    pub magnitude: Option<f64>,
}

/// Check whether a unit code is in the conversion table
pub fn is_recognised_unit(unit: &str) -> bool {
    unit_multiplier(unit).is_some()
}

/// Check whether a unit code should be reported as unrecognised
///
/// Empty units and the not-applicable marker are unknown, but expected.
pub fn is_unrecognised_unit(unit: &str) -> bool {
    !unit.is_empty() && unit != NOT_APPLICABLE_UNIT && !is_recognised_unit(unit)
}

/// Normalise trimmed half-life value and unit columns
///
/// `nuclide` is only used to label the diagnostic emitted for unit codes
/// missing from the table.
pub fn normalise_half_life(value: &str, unit: &str, nuclide: &str) -> NormalisedHalfLife {
    if value == STABLE_TOKEN {
        return NormalisedHalfLife {
            half_life: HalfLife::Stable,
            bound: None,
            magnitude: None,
        };
    }

    if value.is_empty() {
        return NormalisedHalfLife {
            half_life: HalfLife::Unknown,
            bound: None,
            magnitude: None,
        };
    }

    let (bound, rest) = HalfLifeBound::strip(value);
    let (number, _estimated) = strip_estimated(rest);
    let magnitude = parse_optional_f64(number);

    let half_life = match (magnitude, unit_multiplier(unit)) {
        (Some(magnitude), Some(factor)) => HalfLife::from_seconds(magnitude * factor),
        (_, None) => {
            if is_unrecognised_unit(unit) {
                warn!(
                    "Unrecognised half-life unit '{}' for nuclide '{}' (value '{}'), half-life left unknown",
                    unit, nuclide, value
                );
            }
            HalfLife::Unknown
        }
        (None, Some(_)) => HalfLife::Unknown,
    };

    NormalisedHalfLife {
        half_life,
        bound,
        magnitude,
    }
}
