//! Shared test utilities and fixtures for nuclide dataset tests

pub use crate::app::services::nubase_parser::tests::{
    NubaseLine, lithium6_line, manganese52m_line, neutron_line, source_text, uranium238_line,
};
use crate::app::services::nuclide_dataset::NuclideDataset;


/// Source text with a stable, two timed, an isomer and an unknown record
pub fn sample_source() -> String {
    let unknown = NubaseLine::new()
        .mass_number("005")
        .atomic_number("001")
        .level("0")
        .element("5H")
        .half_life("p-unst", "")
        .build();

    source_text(&[
        neutron_line(),
        lithium6_line(),
        unknown,
        manganese52m_line(),
        uranium238_line(),
    ])
}

/// A dataset already loaded with [`sample_source`]
pub fn loaded_dataset() -> NuclideDataset {
    let dataset = NuclideDataset::new("sample");
    dataset
        .load(&sample_source())
        .expect("fresh dataset loads");
    dataset
}
