//! Test utilities and fixtures for NUBASE parser testing
//!
//! Lines are assembled by placing each field at its column start, so the
//! fixtures stay aligned with [`crate::constants::columns`] without hand
//! counted spaces.

use crate::constants::columns;

mod record_parser_tests;

/// Builder for fixed-width NUBASE test lines
#[derive(Debug, Clone, Default)]
pub struct NubaseLine {
    chars: Vec<char>,
}

impl NubaseLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` starting at character column `start`
    pub fn at(mut self, start: usize, value: &str) -> Self {
        let end = start + value.chars().count();
        if self.chars.len() < end {
            self.chars.resize(end, ' ');
        }
        for (offset, c) in value.chars().enumerate() {
            self.chars[start + offset] = c;
        }
        self
    }

    pub fn mass_number(self, value: &str) -> Self {
        self.at(columns::MASS_NUMBER.start, value)
    }

    pub fn atomic_number(self, value: &str) -> Self {
        self.at(columns::ATOMIC_NUMBER.start, value)
    }

    pub fn level(self, value: &str) -> Self {
        self.at(columns::LEVEL_CODE.start, value)
    }

    pub fn element(self, value: &str) -> Self {
        self.at(columns::ELEMENT.start, value)
    }

    pub fn mass_excess(self, value: &str, uncertainty: &str) -> Self {
        self.at(columns::MASS_EXCESS.start, value)
            .at(columns::MASS_EXCESS_UNCERTAINTY.start, uncertainty)
    }

    pub fn excitation(self, value: &str, uncertainty: &str, origin: &str) -> Self {
        self.at(columns::EXCITATION_ENERGY.start, value)
            .at(columns::EXCITATION_ENERGY_UNCERTAINTY.start, uncertainty)
            .at(columns::EXCITATION_ENERGY_ORIGIN.start, origin)
    }

    pub fn half_life(self, value: &str, unit: &str) -> Self {
        self.at(columns::HALF_LIFE_VALUE.start, value)
            .at(columns::HALF_LIFE_UNIT.start, unit)
    }

    pub fn half_life_uncertainty(self, value: &str) -> Self {
        self.at(columns::HALF_LIFE_UNCERTAINTY.start, value)
    }

    pub fn spin_parity(self, value: &str) -> Self {
        self.at(columns::SPIN_PARITY.start, value)
    }

    pub fn ensdf_year(self, value: &str) -> Self {
        self.at(columns::ENSDF_YEAR.start, value)
    }

    pub fn reference(self, value: &str) -> Self {
        self.at(columns::REFERENCE.start, value)
    }

    pub fn discovery_year(self, value: &str) -> Self {
        self.at(columns::DISCOVERY_YEAR.start, value)
    }

    pub fn decay_modes(self, value: &str) -> Self {
        self.at(columns::DECAY_MODES_START, value)
    }

    pub fn build(self) -> String {
        self.chars.into_iter().collect()
    }
}

/// Free neutron, timed in seconds
pub fn neutron_line() -> String {
    NubaseLine::new()
        .mass_number("001")
        .atomic_number("000")
        .level("0")
        .element("1n")
        .mass_excess("8071.3171", "0.0005")
        .half_life("613.9", "s")
        .half_life_uncertainty("0.6")
        .spin_parity("1/2+*")
        .ensdf_year("06")
        .discovery_year("1932")
        .decay_modes("B-=100")
        .build()
}

/// Stable lithium-6
pub fn lithium6_line() -> String {
    NubaseLine::new()
        .mass_number("006")
        .atomic_number("003")
        .level("0")
        .element("6Li")
        .mass_excess("14086.8804", "0.0014")
        .half_life("stbl", "")
        .spin_parity("1+")
        .ensdf_year("02")
        .discovery_year("1921")
        .decay_modes("IS=7.59 4")
        .build()
}

/// Uranium-238, timed in gigayears
pub fn uranium238_line() -> String {
    NubaseLine::new()
        .mass_number("238")
        .atomic_number("092")
        .level("0")
        .element("238U")
        .mass_excess("47308.9", "1.9")
        .half_life("4.468", "Gy")
        .half_life_uncertainty("0.006")
        .spin_parity("0+")
        .ensdf_year("02")
        .discovery_year("1789")
        .decay_modes("A=100;SF=5.45e-5 7")
        .build()
}

/// Isomer of manganese-52 with an estimated excitation energy
pub fn manganese52m_line() -> String {
    NubaseLine::new()
        .mass_number("052")
        .atomic_number("025")
        .level("1")
        .element("52Mnm")
        .mass_excess("-50678.9", "1.9")
        .excitation("377.749#", "0.005", "")
        .half_life("21.1", "m")
        .half_life_uncertainty("0.2")
        .spin_parity("2+")
        .ensdf_year("15")
        .discovery_year("1938")
        .decay_modes("B+=98.22 5;IT=1.78 5")
        .build()
}

/// A complete source text: header followed by the given lines
pub fn source_text(lines: &[String]) -> String {
    let mut text = String::from("AAA ZZZi   A El    Mass excess ...header");
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text
}
