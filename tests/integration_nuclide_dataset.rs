//! Integration tests for loading a NUBASE file through the public API
//!
//! These tests write a small fixed-width table to disk, load it into a
//! dataset and check the records, derived views and readiness notification
//! end to end.

use nubase_chart::app::services::nuclide_dataset::ChartExtent;
use nubase_chart::constants::SECONDS_PER_YEAR;
use nubase_chart::{Error, HalfLife, HalfLifeBound, NuclideDataset};
use std::path::Path;
use std::sync::mpsc;
use tempfile::TempDir;

/// Place each `(column, text)` pair on a blank line
fn line(fields: &[(usize, &str)]) -> String {
    let mut chars: Vec<char> = Vec::new();
    for (start, text) in fields {
        let end = start + text.chars().count();
        if chars.len() < end {
            chars.resize(end, ' ');
        }
        for (offset, c) in text.chars().enumerate() {
            chars[start + offset] = c;
        }
    }
    chars.into_iter().collect()
}

fn nuclide(a: &str, z: &str, level: &str, label: &str, half_life: &str, unit: &str) -> String {
    line(&[
        (0, a),
        (4, z),
        (7, level),
        (11, label),
        (60, half_life),
        (69, unit),
    ])
}

fn sample_table() -> String {
    let lines = [
        nuclide("001", "000", "0", "1n", "613.9", "s"),
        nuclide("003", "001", "0", "3H", "12.32", "y"),
        nuclide("008", "004", "0", "8Be", "81.9", "as"),
        String::new(),
        nuclide("180", "073", "1", "180Tam", ">1.2", "Py"),
        nuclide("007", "002", "0", "7He", "1.5", "xx"),
        nuclide("056", "026", "0", "56Fe", "stbl", ""),
        "ñé garbage".to_string(),
    ];

    let mut text = String::from("NUBASE2016 header line");
    for l in &lines {
        text.push_str("\r\n");
        text.push_str(l);
    }
    text
}

fn write_table(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("nubase2016.txt");
    std::fs::write(&path, sample_table()).unwrap();
    path
}

/// Test loading a table file and reading records back in file order
///
/// Purpose: Validate the parse path from disk to typed records
/// Benefit: Catches column drift and unit conversion regressions
#[tokio::test]
async fn test_open_parses_table_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(&temp_dir);

    let dataset = NuclideDataset::open(&path).await.unwrap();
    let records = dataset.records().unwrap();

    let labels: Vec<_> = records.iter().map(|r| r.element_symbol.as_str()).collect();
    assert_eq!(labels, vec!["1n", "3H", "8Be", "180Tam", "7He", "56Fe", ""]);

    for record in records.iter() {
        if let (Some(a), Some(z)) = (record.mass_number, record.atomic_number) {
            assert_eq!(record.neutron_number, Some(i64::from(a) - i64::from(z)));
        }
    }

    assert_eq!(records[1].half_life_seconds(), Some(12.32 * SECONDS_PER_YEAR));
    assert_eq!(records[2].half_life_seconds(), Some(81.9 * 1e-18));
    assert_eq!(records[3].half_life_bound, Some(HalfLifeBound::GreaterThan));
    assert_eq!(
        records[3].half_life_seconds(),
        Some(1.2 * (SECONDS_PER_YEAR * 1e15))
    );
    assert!(!records[3].is_ground_state());
    assert_eq!(records[3].chemical_symbol(), Some("Ta"));
    assert_eq!(records[4].half_life, HalfLife::Unknown);
    assert!(records[5].is_stable());

    // Non-ASCII garbage still yields a record with missing fields
    assert_eq!(records[6].mass_number, None);
    assert_eq!(records[6].half_life, HalfLife::Unknown);
}

/// Test load statistics and derived views
///
/// Purpose: Validate the aggregate views chart consumers rely on
/// Benefit: Ensures stable and unknown entries stay out of the half-life range
#[tokio::test]
async fn test_metadata_and_views() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(&temp_dir);
    let dataset = NuclideDataset::open(&path).await.unwrap();

    let metadata = dataset.metadata().unwrap();
    assert_eq!(metadata.stats.records_parsed, 7);
    assert_eq!(metadata.stats.blank_lines_skipped, 1);
    assert_eq!(metadata.stats.stable_records, 1);
    assert_eq!(metadata.stats.timed_records, 4);
    assert_eq!(metadata.stats.unknown_half_life, 2);
    assert_eq!(metadata.stats.unrecognised_units.get("xx"), Some(&1));

    let domain = dataset.half_life_domain().unwrap().unwrap();
    assert_eq!(domain.min, 81.9 * 1e-18);
    assert_eq!(domain.max, 1.2 * (SECONDS_PER_YEAR * 1e15));

    assert_eq!(
        dataset.chart_extent().unwrap(),
        Some(ChartExtent {
            min_z: 0,
            max_z: 73,
            min_n: 1,
            max_n: 107,
        })
    );
    assert_eq!(dataset.proton_numbers().unwrap(), vec![0, 1, 2, 4, 26, 73]);

    let iron = dataset.find(26, 56).unwrap().unwrap();
    assert!(iron.is_stable());
}

/// Test that subscribers registered before the load all hear about it once
///
/// Purpose: Validate readiness notification across tasks and callbacks
/// Benefit: Consumers can subscribe without knowing when loading happens
#[tokio::test]
async fn test_subscribers_notified_after_file_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(&temp_dir);

    let dataset = NuclideDataset::new(path.display().to_string());

    let (tx, rx) = mpsc::channel();
    for id in 0..3 {
        let tx = tx.clone();
        dataset.on_ready(move |records| {
            tx.send((id, records.len())).unwrap();
        });
    }

    let waiters: Vec<_> = (0..4)
        .map(|_| {
            let ready = dataset.ready();
            tokio::spawn(async move { ready.await.map(|records| records.len()) })
        })
        .collect();

    dataset.load_from_path(&path).await.unwrap();

    for waiter in waiters {
        assert_eq!(waiter.await.unwrap().unwrap(), 7);
    }

    drop(tx);
    let delivered: Vec<_> = rx.iter().collect();
    assert_eq!(delivered, vec![(0, 7), (1, 7), (2, 7)]);

    assert!(matches!(
        dataset.load_from_path(&path).await,
        Err(Error::AlreadyLoaded { .. })
    ));
}

/// Test that a missing file is reported and leaves the dataset unloaded
#[tokio::test]
async fn test_missing_file() {
    let result = NuclideDataset::open(Path::new("/nonexistent/nubase2016.txt")).await;
    assert!(matches!(result, Err(Error::Io { .. })));
}
