//! Tests for single-line record parsing

use super::*;
use crate::app::models::{HalfLife, HalfLifeBound};
use crate::app::services::nubase_parser::parse_line;

#[test]
fn test_parse_neutron() {
    let record = parse_line(&neutron_line());

    assert_eq!(record.mass_number, Some(1));
    assert_eq!(record.atomic_number, Some(0));
    assert_eq!(record.neutron_number, Some(1));
    assert_eq!(record.level_code, "0");
    assert_eq!(record.element_symbol, "1n");
    assert_eq!(record.mass_excess, Some(8071.3171));
    assert_eq!(record.mass_excess_uncertainty, Some(0.0005));
    assert!(!record.mass_excess_estimated);
    assert_eq!(record.half_life_raw, "613.9");
    assert_eq!(record.half_life_unit, "s");
    assert_eq!(record.half_life_uncertainty, Some(0.6));
    assert_eq!(record.half_life, HalfLife::Seconds(613.9));
    assert_eq!(record.spin_parity, "1/2+*");
    assert_eq!(record.ensdf_year, Some(6));
    assert_eq!(record.discovery_year, Some(1932));
    assert_eq!(record.decay_modes, "B-=100");
    assert!(record.is_ground_state());
}

#[test]
fn test_parse_stable_nuclide() {
    let record = parse_line(&lithium6_line());

    assert_eq!(record.mass_number, Some(6));
    assert_eq!(record.atomic_number, Some(3));
    assert_eq!(record.neutron_number, Some(3));
    assert!(record.is_stable());
    assert_eq!(record.half_life_seconds(), None);
    assert_eq!(record.half_life_raw, "stbl");
    assert_eq!(record.half_life_unit, "");
    assert_eq!(record.chemical_symbol(), Some("Li"));
    assert_eq!(record.decay_modes, "IS=7.59 4");
}

#[test]
fn test_parse_isomer_with_estimated_excitation() {
    let record = parse_line(&manganese52m_line());

    assert_eq!(record.neutron_number, Some(27));
    assert_eq!(record.isomer_index(), Some(1));
    assert!(!record.is_ground_state());
    assert_eq!(record.chemical_symbol(), Some("Mn"));
    assert_eq!(record.mass_excess, Some(-50678.9));
    assert_eq!(record.excitation_energy, Some(377.749));
    assert!(record.excitation_energy_estimated);
    assert_eq!(record.excitation_energy_uncertainty, Some(0.005));
    assert_eq!(record.half_life, HalfLife::Seconds(21.1 * 60.0));
    assert_eq!(record.decay_modes, "B+=98.22 5;IT=1.78 5");
}

#[test]
fn test_parse_sentinel_scenario() {
    let line = NubaseLine::new()
        .mass_number("  3")
        .atomic_number("  4")
        .level("1")
        .element("li-6")
        .mass_excess("12.34", "0.56")
        .half_life("stbl", "")
        .decay_modes("decay")
        .build();
    let record = parse_line(&line);

    assert_eq!(record.mass_number, Some(3));
    assert_eq!(record.atomic_number, Some(4));
    assert_eq!(record.neutron_number, Some(-1));
    assert_eq!(record.element_symbol, "li-6");
    assert_eq!(record.mass_excess, Some(12.34));
    assert!(record.is_stable());
    assert_eq!(record.half_life_seconds(), None);
}

#[test]
fn test_parse_approximate_half_life() {
    let line = NubaseLine::new()
        .mass_number("009")
        .atomic_number("004")
        .level("0")
        .element("9Be")
        .half_life("~5", "ms")
        .build();
    let record = parse_line(&line);

    assert_eq!(record.half_life_raw, "~5");
    assert_eq!(record.half_life_bound, Some(HalfLifeBound::Approximate));
    let seconds = record.half_life_seconds().unwrap();
    assert!((seconds - 0.005).abs() < 1e-15);
}

#[test]
fn test_parse_unrecognised_unit() {
    let line = NubaseLine::new()
        .mass_number("009")
        .atomic_number("004")
        .level("0")
        .element("9Be")
        .half_life("7", "xx")
        .build();
    let record = parse_line(&line);

    assert_eq!(record.half_life_unit, "xx");
    assert_eq!(record.half_life, HalfLife::Unknown);
    assert!(!record.is_stable());
}

#[test]
fn test_parse_is_total_on_short_lines() {
    for line in ["", " ", "0", "238", "238 092", "238 0920   238U", "garbage line"] {
        let record = parse_line(line);
        assert_eq!(record.half_life, HalfLife::Unknown);
        assert_eq!(record.decay_modes, "");
        assert_eq!(record.mass_excess, None);
    }

    let record = parse_line("238 0920   238U");
    assert_eq!(record.mass_number, Some(238));
    assert_eq!(record.atomic_number, Some(92));
    assert_eq!(record.neutron_number, Some(146));
    assert_eq!(record.element_symbol, "238U");
}

#[test]
fn test_unparseable_numbers_are_missing_not_zero() {
    let line = NubaseLine::new()
        .mass_number("abc")
        .atomic_number("0x2")
        .element("??")
        .mass_excess("n/a", "?")
        .discovery_year("19??")
        .build();
    let record = parse_line(&line);

    assert_eq!(record.mass_number, None);
    assert_eq!(record.atomic_number, None);
    assert_eq!(record.neutron_number, None);
    assert_eq!(record.mass_excess, None);
    assert_eq!(record.mass_excess_uncertainty, None);
    assert_eq!(record.discovery_year, None);
}

#[test]
fn test_neutron_number_invariant() {
    for line in [neutron_line(), lithium6_line(), uranium238_line(), manganese52m_line()] {
        let record = parse_line(&line);
        let a = i64::from(record.mass_number.unwrap());
        let z = i64::from(record.atomic_number.unwrap());
        assert_eq!(record.neutron_number, Some(a - z));
    }
}

#[test]
fn test_half_life_exclusivity() {
    let lines = [
        neutron_line(),
        lithium6_line(),
        uranium238_line(),
        manganese52m_line(),
        "garbage".to_string(),
    ];
    for line in lines {
        let record = parse_line(&line);
        let states = [
            record.is_stable(),
            record.half_life_seconds().is_some_and(f64::is_finite),
            record.half_life.is_unknown(),
        ];
        assert_eq!(states.iter().filter(|s| **s).count(), 1, "{:?}", record);
    }
}

#[test]
fn test_crlf_does_not_leak_into_fields() {
    let line = format!("{}\r", neutron_line());
    let record = parse_line(&line);
    assert_eq!(record.decay_modes, "B-=100");
}
