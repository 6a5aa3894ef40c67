//! Data models for NUBASE processing
//!
//! This module contains the core data structures for representing one nuclide
//! entry of the NUBASE table, including the normalised half-life and the
//! qualifier markers the table attaches to approximate values.

use crate::constants::GROUND_STATE_LEVEL;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Leading mass digits followed by the letters of a nuclide label (`52Mnm`)
static NUCLIDE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d*([A-Za-z]+)").expect("nuclide label pattern is valid")
});

// =============================================================================
// Half-life
// =============================================================================

/// Normalised half-life of a nuclide
///
/// The three states are mutually exclusive: a record is either stable, has a
/// finite half-life in seconds, or its half-life is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "seconds", rename_all = "snake_case")]
pub enum HalfLife {
    /// The table marks the nuclide `stbl`; there is no finite half-life
    Stable,

    /// Half-life in seconds (always finite)
    Seconds(f64),

    /// No value, no unit, or a unit that is not in the conversion table
    Unknown,
}

impl HalfLife {
    /// Build a half-life from a computed number of seconds
    ///
    /// Non-finite values (overflow, NaN) become `Unknown`.
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds.is_finite() {
            Self::Seconds(seconds)
        } else {
            Self::Unknown
        }
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Half-life in seconds, if finite and known
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Self::Seconds(seconds) => Some(*seconds),
            Self::Stable | Self::Unknown => None,
        }
    }
}

/// Qualifier prefix stripped from a half-life value before parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfLifeBound {
    /// `~` approximate value
    Approximate,
    /// `>` lower bound
    GreaterThan,
    /// `<` upper bound
    LessThan,
    /// `R=` range hint
    RangeHint,
    /// `R<` range hint with upper bound
    RangeHintBelow,
}

impl HalfLifeBound {
    /// All markers, two-character markers first so `R<` is not read as `R`
    pub const ALL: [HalfLifeBound; 5] = [
        Self::RangeHint,
        Self::RangeHintBelow,
        Self::Approximate,
        Self::GreaterThan,
        Self::LessThan,
    ];

    /// The marker as written in the table
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Approximate => "~",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::RangeHint => "R=",
            Self::RangeHintBelow => "R<",
        }
    }

    /// Split a leading marker off a half-life value
    pub fn strip(value: &str) -> (Option<Self>, &str) {
        for bound in Self::ALL {
            if let Some(rest) = value.strip_prefix(bound.marker()) {
                return (Some(bound), rest.trim_start());
            }
        }
        (None, value)
    }
}

impl fmt::Display for HalfLifeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

// =============================================================================
// Isotope Record
// =============================================================================

/// One nuclide entry parsed from one line of the NUBASE table
///
/// Missing or unparseable numeric fields are `None`, never zero. Text fields
/// are trimmed and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotopeRecord {
    /// Mass number A (protons + neutrons)
    pub mass_number: Option<u32>,

    /// Atomic number Z (protons)
    pub atomic_number: Option<u32>,

    /// Neutron number N, always `A - Z` when both are present
    pub neutron_number: Option<i64>,

    /// Isomer / level code following Z (`0` for ground states)
    pub level_code: String,

    /// Nuclide label as written in the table (e.g. `6Li`, `52Mnm`)
    pub element_symbol: String,

    /// Mass excess in keV
    pub mass_excess: Option<f64>,

    /// Mass excess uncertainty in keV
    pub mass_excess_uncertainty: Option<f64>,

    /// Mass excess was estimated from systematics (`#`)
    pub mass_excess_estimated: bool,

    /// Excitation energy in keV (isomers and levels)
    pub excitation_energy: Option<f64>,

    /// Excitation energy uncertainty in keV
    pub excitation_energy_uncertainty: Option<f64>,

    /// Excitation energy was estimated from systematics (`#`)
    pub excitation_energy_estimated: bool,

    /// Origin code of the excitation energy
    pub excitation_energy_origin: String,

    /// Half-life value as read, qualifier prefixes preserved
    pub half_life_raw: String,

    /// Half-life unit code (e.g. `s`, `ms`, `My`), may be empty
    pub half_life_unit: String,

    /// Half-life uncertainty in `half_life_unit`
    pub half_life_uncertainty: Option<f64>,

    /// Qualifier stripped from the half-life value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_life_bound: Option<HalfLifeBound>,

    /// Normalised half-life
    pub half_life: HalfLife,

    /// Spin and parity
    pub spin_parity: String,

    /// Two-digit ENSDF archive year
    pub ensdf_year: Option<i32>,

    /// Reference code
    pub reference: String,

    /// Year of discovery
    pub discovery_year: Option<i32>,

    /// Decay modes and branching ratios
    pub decay_modes: String,
}

impl IsotopeRecord {
    /// True when the table marks the nuclide stable
    pub fn is_stable(&self) -> bool {
        self.half_life.is_stable()
    }

    /// Half-life in seconds, if known
    pub fn half_life_seconds(&self) -> Option<f64> {
        self.half_life.seconds()
    }

    /// Isomer index from the first character of the level code
    pub fn isomer_index(&self) -> Option<u8> {
        self.level_code
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
    }

    pub fn is_ground_state(&self) -> bool {
        self.isomer_index() == Some(GROUND_STATE_LEVEL)
    }

    /// Chemical symbol with mass digits and isomer suffix removed
    ///
    /// `52Mnm` gives `Mn`, `6Li` gives `Li`, `1n` gives `n`.
    pub fn chemical_symbol(&self) -> Option<&str> {
        let letters = NUCLIDE_LABEL
            .captures(&self.element_symbol)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())?;

        let excited = self.isomer_index().is_some_and(|i| i != GROUND_STATE_LEVEL);
        if excited && letters.len() > 1 && letters.ends_with(|c: char| c.is_ascii_lowercase()) {
            Some(&letters[..letters.len() - 1])
        } else {
            Some(letters)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_label(label: &str, level: &str) -> IsotopeRecord {
        IsotopeRecord {
            mass_number: None,
            atomic_number: None,
            neutron_number: None,
            level_code: level.to_string(),
            element_symbol: label.to_string(),
            mass_excess: None,
            mass_excess_uncertainty: None,
            mass_excess_estimated: false,
            excitation_energy: None,
            excitation_energy_uncertainty: None,
            excitation_energy_estimated: false,
            excitation_energy_origin: String::new(),
            half_life_raw: String::new(),
            half_life_unit: String::new(),
            half_life_uncertainty: None,
            half_life_bound: None,
            half_life: HalfLife::Unknown,
            spin_parity: String::new(),
            ensdf_year: None,
            reference: String::new(),
            discovery_year: None,
            decay_modes: String::new(),
        }
    }

    #[test]
    fn test_half_life_states_are_exclusive() {
        assert!(HalfLife::Stable.is_stable());
        assert_eq!(HalfLife::Stable.seconds(), None);

        assert!(HalfLife::Unknown.is_unknown());
        assert_eq!(HalfLife::Unknown.seconds(), None);

        let timed = HalfLife::Seconds(613.9);
        assert!(!timed.is_stable());
        assert!(!timed.is_unknown());
        assert_eq!(timed.seconds(), Some(613.9));
    }

    #[test]
    fn test_half_life_from_non_finite_seconds() {
        assert_eq!(HalfLife::from_seconds(f64::INFINITY), HalfLife::Unknown);
        assert_eq!(HalfLife::from_seconds(f64::NAN), HalfLife::Unknown);
        assert_eq!(HalfLife::from_seconds(2.5), HalfLife::Seconds(2.5));
    }

    #[test]
    fn test_bound_strip() {
        assert_eq!(
            HalfLifeBound::strip("~5"),
            (Some(HalfLifeBound::Approximate), "5")
        );
        assert_eq!(
            HalfLifeBound::strip(">300"),
            (Some(HalfLifeBound::GreaterThan), "300")
        );
        assert_eq!(
            HalfLifeBound::strip("R<1.2"),
            (Some(HalfLifeBound::RangeHintBelow), "1.2")
        );
        assert_eq!(
            HalfLifeBound::strip("R= 4"),
            (Some(HalfLifeBound::RangeHint), "4")
        );
        assert_eq!(HalfLifeBound::strip("12.3"), (None, "12.3"));
    }

    #[test]
    fn test_chemical_symbol() {
        assert_eq!(record_with_label("6Li", "0").chemical_symbol(), Some("Li"));
        assert_eq!(record_with_label("1n", "0").chemical_symbol(), Some("n"));
        assert_eq!(record_with_label("52Mnm", "1").chemical_symbol(), Some("Mn"));
        assert_eq!(record_with_label("10Bm", "1").chemical_symbol(), Some("B"));
        assert_eq!(record_with_label("", "0").chemical_symbol(), None);
    }

    #[test]
    fn test_ground_state_from_level_code() {
        assert!(record_with_label("6Li", "0").is_ground_state());
        assert!(!record_with_label("52Mnm", "1").is_ground_state());
        assert!(!record_with_label("6Li", "").is_ground_state());
        assert_eq!(record_with_label("52Mnm", "1W").isomer_index(), Some(1));
    }
}
