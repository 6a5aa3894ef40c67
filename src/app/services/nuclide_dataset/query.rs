//! Derived read-only views over the loaded records
//!
//! This module provides the aggregate views chart consumers ask for: the
//! half-life domain, the proton/neutron extent of the chart, distinct Z and N
//! values, lookups by nuclide, and a log-scale half-life histogram. The views
//! are plain functions over a record slice; the dataset methods call them on
//! the loaded records and cache the ones that every chart needs.

use super::NuclideDataset;
use crate::app::models::IsotopeRecord;
use crate::constants::{MAX_HISTOGRAM_BINS, MIN_HISTOGRAM_BIN_DECADES};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Smallest and largest known half-life in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfLifeDomain {
    pub min: f64,
    pub max: f64,
}

impl HalfLifeDomain {
    /// Number of decades spanned by the domain
    pub fn decades(&self) -> f64 {
        if self.min > 0.0 {
            (self.max / self.min).log10()
        } else {
            f64::NAN
        }
    }
}

/// Proton and neutron number ranges covered by the records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartExtent {
    pub min_z: i64,
    pub max_z: i64,
    pub min_n: i64,
    pub max_n: i64,
}

impl ChartExtent {
    /// Widen the extent by `margin` on every side, never below zero
    pub fn padded(&self, margin: u32) -> Self {
        let margin = i64::from(margin);
        Self {
            min_z: (self.min_z - margin).max(0),
            max_z: self.max_z + margin,
            min_n: (self.min_n - margin).max(0),
            max_n: self.max_n + margin,
        }
    }
}

/// One bin of the log10(seconds) half-life histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge, log10 seconds
    pub lower_log10: f64,
    /// Exclusive upper edge, log10 seconds
    pub upper_log10: f64,
    pub count: usize,
}

// =============================================================================
// Views over a record slice
// =============================================================================

/// Min/max half-life over records with a known numeric half-life
///
/// Stable and unknown records are excluded. `None` if no record qualifies.
pub fn half_life_domain(records: &[IsotopeRecord]) -> Option<HalfLifeDomain> {
    records
        .iter()
        .filter_map(IsotopeRecord::half_life_seconds)
        .fold(None, |domain, seconds| {
            Some(match domain {
                None => HalfLifeDomain {
                    min: seconds,
                    max: seconds,
                },
                Some(HalfLifeDomain { min, max }) => HalfLifeDomain {
                    min: min.min(seconds),
                    max: max.max(seconds),
                },
            })
        })
}

/// Z and N ranges over records where both are known
pub fn chart_extent(records: &[IsotopeRecord]) -> Option<ChartExtent> {
    records
        .iter()
        .filter_map(|r| Some((i64::from(r.atomic_number?), r.neutron_number?)))
        .fold(None, |extent, (z, n)| {
            Some(match extent {
                None => ChartExtent {
                    min_z: z,
                    max_z: z,
                    min_n: n,
                    max_n: n,
                },
                Some(e) => ChartExtent {
                    min_z: e.min_z.min(z),
                    max_z: e.max_z.max(z),
                    min_n: e.min_n.min(n),
                    max_n: e.max_n.max(n),
                },
            })
        })
}

/// Distinct proton numbers, ascending
pub fn proton_numbers(records: &[IsotopeRecord]) -> Vec<u32> {
    let set: BTreeSet<u32> = records.iter().filter_map(|r| r.atomic_number).collect();
    set.into_iter().collect()
}

/// Distinct neutron numbers, ascending
pub fn neutron_numbers(records: &[IsotopeRecord]) -> Vec<i64> {
    let set: BTreeSet<i64> = records.iter().filter_map(|r| r.neutron_number).collect();
    set.into_iter().collect()
}

/// Record counts per non-empty half-life unit code
pub fn unit_counts(records: &[IsotopeRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records.iter().filter(|r| !r.half_life_unit.is_empty()) {
        *counts.entry(record.half_life_unit.clone()).or_insert(0) += 1;
    }
    counts
}

/// Histogram of log10(half-life seconds) with bins `bin_decades` wide
///
/// Bins are aligned to multiples of `bin_decades` and contiguous from the
/// lowest to the highest populated bin. Non-positive half-lives have no
/// logarithm and are left out.
///
/// # Errors
/// * Returns `Error::Configuration` if `bin_decades` is not a finite number
///   of at least `MIN_HISTOGRAM_BIN_DECADES`, or if the populated range would
///   need more than `MAX_HISTOGRAM_BINS` bins
pub fn half_life_histogram(
    records: &[IsotopeRecord],
    bin_decades: f64,
) -> Result<Vec<HistogramBin>> {
    validate_bin_decades(bin_decades)?;

    let logs: Vec<f64> = records
        .iter()
        .filter_map(IsotopeRecord::half_life_seconds)
        .filter(|s| *s > 0.0)
        .map(f64::log10)
        .collect();

    let (Some(min_log), Some(max_log)) = (
        logs.iter().copied().reduce(f64::min),
        logs.iter().copied().reduce(f64::max),
    ) else {
        return Ok(Vec::new());
    };

    let first = (min_log / bin_decades).floor();
    let last = (max_log / bin_decades).floor();
    let bin_count = last - first + 1.0;
    if !(bin_count.is_finite() && bin_count <= MAX_HISTOGRAM_BINS as f64) {
        return Err(Error::configuration(format!(
            "Histogram bin width of {} decades needs more than {} bins",
            bin_decades, MAX_HISTOGRAM_BINS
        )));
    }

    // Bounded above, so these conversions cannot saturate
    let first = first as i64;
    let mut counts = vec![0usize; bin_count as usize];
    for log in logs {
        let offset = ((log / bin_decades).floor() as i64 - first) as usize;
        if let Some(count) = counts.get_mut(offset) {
            *count += 1;
        }
    }

    counts
        .into_iter()
        .zip(first..)
        .map(|(count, index)| {
            let upper = index
                .checked_add(1)
                .ok_or_else(|| Error::configuration("Histogram bin index out of range"))?;
            Ok(HistogramBin {
                lower_log10: index as f64 * bin_decades,
                upper_log10: upper as f64 * bin_decades,
                count,
            })
        })
        .collect()
}

/// Check a histogram bin width in decades
///
/// # Errors
/// * Returns `Error::Configuration` unless the width is finite and at least
///   `MIN_HISTOGRAM_BIN_DECADES`
pub fn validate_bin_decades(bin_decades: f64) -> Result<()> {
    if bin_decades.is_finite() && bin_decades >= MIN_HISTOGRAM_BIN_DECADES {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Histogram bin width must be a finite number of at least {} decades, got {}",
            MIN_HISTOGRAM_BIN_DECADES, bin_decades
        )))
    }
}

// =============================================================================
// Dataset views
// =============================================================================

impl NuclideDataset {
    /// Min/max known half-life in seconds, computed once and cached
    ///
    /// # Errors
    /// * Returns `Error::NotLoaded` before loading completes
    pub fn half_life_domain(&self) -> Result<Option<HalfLifeDomain>> {
        let records = self.records()?;
        Ok(*self
            .inner
            .half_life_domain
            .get_or_init(|| half_life_domain(&records)))
    }

    /// Z/N extent of the chart, computed once and cached
    pub fn chart_extent(&self) -> Result<Option<ChartExtent>> {
        let records = self.records()?;
        Ok(*self
            .inner
            .chart_extent
            .get_or_init(|| chart_extent(&records)))
    }

    pub fn proton_numbers(&self) -> Result<Vec<u32>> {
        Ok(proton_numbers(&self.records()?))
    }

    pub fn neutron_numbers(&self) -> Result<Vec<i64>> {
        Ok(neutron_numbers(&self.records()?))
    }

    /// Ground-state records in file order
    pub fn ground_states(&self) -> Result<Vec<IsotopeRecord>> {
        Ok(self
            .records()?
            .iter()
            .filter(|r| r.is_ground_state())
            .cloned()
            .collect())
    }

    /// All records (ground states and isomers) with atomic number `z`
    pub fn isotopes_of(&self, z: u32) -> Result<Vec<IsotopeRecord>> {
        Ok(self
            .records()?
            .iter()
            .filter(|r| r.atomic_number == Some(z))
            .cloned()
            .collect())
    }

    /// Ground state of the nuclide with atomic number `z` and mass number `a`
    ///
    /// Falls back to the first matching record if no ground state is listed.
    pub fn find(&self, z: u32, a: u32) -> Result<Option<IsotopeRecord>> {
        let records = self.records()?;
        let mut matching = records
            .iter()
            .filter(|r| r.atomic_number == Some(z) && r.mass_number == Some(a))
            .peekable();

        let first = matching.peek().copied();
        Ok(matching
            .find(|r| r.is_ground_state())
            .or(first)
            .cloned())
    }

    pub fn unit_counts(&self) -> Result<BTreeMap<String, usize>> {
        Ok(unit_counts(&self.records()?))
    }

    /// Log-scale half-life histogram over the loaded records
    pub fn half_life_histogram(&self, bin_decades: f64) -> Result<Vec<HistogramBin>> {
        half_life_histogram(&self.records()?, bin_decades)
    }
}
