//! Individual line parsing for NUBASE tables
//!
//! This module handles the parsing of a single fixed-width line into an
//! [`IsotopeRecord`], including half-life normalisation and the `#`
//! estimated-value markers.

use tracing::trace;

use super::field_parsers::{
    column, column_from, parse_estimated_f64, parse_optional_f64, parse_optional_i32,
    parse_optional_u32,
};
use super::half_life::normalise_half_life;
use crate::app::models::IsotopeRecord;
use crate::constants::columns;

/// Parse a single NUBASE line into a record
///
/// Never fails: fields beyond the end of the line, or that do not parse,
/// come back as `None` or empty strings.
pub fn parse_line(line: &str) -> IsotopeRecord {
    let mass_number = parse_optional_u32(column(line, columns::MASS_NUMBER));
    let atomic_number = parse_optional_u32(column(line, columns::ATOMIC_NUMBER));
    let neutron_number = match (mass_number, atomic_number) {
        (Some(a), Some(z)) => Some(i64::from(a) - i64::from(z)),
        _ => None,
    };

    let element_symbol = column(line, columns::ELEMENT).to_string();

    let (mass_excess, mass_excess_estimated) =
        parse_estimated_f64(column(line, columns::MASS_EXCESS));
    let (mass_excess_uncertainty, _) =
        parse_estimated_f64(column(line, columns::MASS_EXCESS_UNCERTAINTY));

    let (excitation_energy, excitation_energy_estimated) =
        parse_estimated_f64(column(line, columns::EXCITATION_ENERGY));
    let (excitation_energy_uncertainty, _) =
        parse_estimated_f64(column(line, columns::EXCITATION_ENERGY_UNCERTAINTY));

    let half_life_raw = column(line, columns::HALF_LIFE_VALUE);
    let half_life_unit = column(line, columns::HALF_LIFE_UNIT);
    let normalised = normalise_half_life(half_life_raw, half_life_unit, &element_symbol);

    trace!(
        "Parsed {} (A={:?}, Z={:?}): half-life {:?}",
        element_symbol, mass_number, atomic_number, normalised.half_life
    );

    IsotopeRecord {
        mass_number,
        atomic_number,
        neutron_number,
        level_code: column(line, columns::LEVEL_CODE).to_string(),
        element_symbol,
        mass_excess,
        mass_excess_uncertainty,
        mass_excess_estimated,
        excitation_energy,
        excitation_energy_uncertainty,
        excitation_energy_estimated,
        excitation_energy_origin: column(line, columns::EXCITATION_ENERGY_ORIGIN).to_string(),
        half_life_raw: half_life_raw.to_string(),
        half_life_unit: half_life_unit.to_string(),
        half_life_uncertainty: parse_optional_f64(column(line, columns::HALF_LIFE_UNCERTAINTY)),
        half_life_bound: normalised.bound,
        half_life: normalised.half_life,
        spin_parity: column(line, columns::SPIN_PARITY).to_string(),
        ensdf_year: parse_optional_i32(column(line, columns::ENSDF_YEAR)),
        reference: column(line, columns::REFERENCE).to_string(),
        discovery_year: parse_optional_i32(column(line, columns::DISCOVERY_YEAR)),
        decay_modes: column_from(line, columns::DECAY_MODES_START).to_string(),
    }
}
