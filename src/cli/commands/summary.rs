//! Summary command implementation
//!
//! Loads a NUBASE table and reports record counts, the half-life domain, the
//! chart extent and a log-scale half-life histogram.

use super::shared::{format_size, load_configuration, load_dataset, resolve_source, select_records};
use crate::app::models::IsotopeRecord;
use crate::app::services::nubase_parser::ParseStats;
use crate::app::services::nuclide_dataset::query::{
    chart_extent, half_life_domain, half_life_histogram, unit_counts,
};
use crate::app::services::nuclide_dataset::{
    ChartExtent, DatasetMetadata, HalfLifeDomain, HistogramBin,
};
use crate::cli::args::{Args, OutputFormat, SummaryArgs};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Everything the summary command reports
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub source: String,
    pub source_bytes: usize,
    pub parse_seconds: f64,
    pub records_per_second: f64,
    pub total_records: usize,
    pub ground_states_only: bool,
    pub records_considered: usize,
    pub stable: usize,
    pub timed: usize,
    pub unknown: usize,
    pub half_life_domain: Option<HalfLifeDomain>,
    pub chart_extent: Option<ChartExtent>,
    pub unit_counts: BTreeMap<String, usize>,
    pub unrecognised_units: BTreeMap<String, usize>,
    pub histogram: Vec<HistogramBin>,
}

impl SummaryReport {
    /// Build the report over `records`, honouring the configured filters
    pub fn build(
        metadata: &DatasetMetadata,
        records: &[IsotopeRecord],
        config: &Config,
    ) -> Result<Self> {
        let considered = select_records(records, config.ground_states_only);
        let stats = considered.iter().fold(ParseStats::new(), |mut stats, record| {
            stats.record(record);
            stats
        });

        Ok(Self {
            source: metadata.source_label.clone(),
            source_bytes: metadata.source_bytes,
            parse_seconds: metadata.parse_duration.as_secs_f64(),
            records_per_second: metadata.parsing_rate(),
            total_records: records.len(),
            ground_states_only: config.ground_states_only,
            records_considered: considered.len(),
            stable: stats.stable_records,
            timed: stats.timed_records,
            unknown: stats.unknown_half_life,
            half_life_domain: half_life_domain(&considered),
            chart_extent: chart_extent(&considered).map(|e| e.padded(config.chart_padding)),
            unit_counts: unit_counts(&considered),
            unrecognised_units: stats.unrecognised_units,
            histogram: half_life_histogram(&considered, config.histogram_bin_decades)?,
        })
    }
}

/// Summary command runner
pub async fn run_summary(args: &Args, summary: &SummaryArgs) -> Result<DatasetMetadata> {
    let config = load_configuration(args, summary.input.as_ref(), summary.ground_states_only)?;
    let source = resolve_source(&config)?;

    info!("Summarising NUBASE table: {}", source.display());

    let show_progress = args.show_progress() && summary.format == OutputFormat::Human;
    let (dataset, records) = load_dataset(source, show_progress).await?;
    let metadata = dataset.metadata()?;

    let report = SummaryReport::build(&metadata, &records, &config)?;
    debug!("Summary report: {:?}", report);

    match summary.format {
        OutputFormat::Human => print_human_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
    }

    Ok(metadata)
}

fn print_human_report(report: &SummaryReport) {
    println!("\n{}", "NUBASE Summary".bright_green().bold());
    println!(
        "  {} {} ({})",
        "Source:".bright_cyan(),
        report.source.bright_white(),
        format_size(report.source_bytes as u64)
    );
    println!(
        "  {} {:.3}s ({:.0} records/sec)",
        "Parse time:".bright_cyan(),
        report.parse_seconds,
        report.records_per_second
    );

    if report.ground_states_only {
        println!(
            "  {} {} of {} (ground states only)",
            "Records:".bright_cyan(),
            report.records_considered.to_string().bright_white().bold(),
            report.total_records
        );
    } else {
        println!(
            "  {} {}",
            "Records:".bright_cyan(),
            report.total_records.to_string().bright_white().bold()
        );
    }

    println!(
        "  {} {}  {} {}  {} {}",
        "Stable:".bright_cyan(),
        report.stable.to_string().bright_white(),
        "Timed:".bright_cyan(),
        report.timed.to_string().bright_white(),
        "Unknown:".bright_cyan(),
        report.unknown.to_string().bright_white()
    );

    match &report.half_life_domain {
        Some(domain) => println!(
            "  {} {:.3e} s .. {:.3e} s ({:.1} decades)",
            "Half-life range:".bright_cyan(),
            domain.min,
            domain.max,
            domain.decades()
        ),
        None => println!("  {} none", "Half-life range:".bright_cyan()),
    }

    if let Some(extent) = &report.chart_extent {
        println!(
            "  {} Z {}..{}, N {}..{}",
            "Chart extent:".bright_cyan(),
            extent.min_z,
            extent.max_z,
            extent.min_n,
            extent.max_n
        );
    }

    if !report.unrecognised_units.is_empty() {
        let units: Vec<String> = report
            .unrecognised_units
            .iter()
            .map(|(unit, count)| format!("'{}' x{}", unit, count))
            .collect();
        println!(
            "  {} {}",
            "Unrecognised units:".bright_red(),
            units.join(", ").bright_red().bold()
        );
    }

    if !report.histogram.is_empty() {
        println!("\n{}", "Half-life histogram (log10 s)".bright_green().bold());
        let widest = report.histogram.iter().map(|b| b.count).max().unwrap_or(0);
        for bin in &report.histogram {
            println!(
                "  [{:>6.1}, {:>6.1})  {:>6}  {}",
                bin.lower_log10,
                bin.upper_log10,
                bin.count,
                histogram_bar(bin.count, widest).bright_blue()
            );
        }
    }

    println!();
}

/// Bar of at most 40 cells proportional to `count / widest`
fn histogram_bar(count: usize, widest: usize) -> String {
    const WIDTH: usize = 40;
    if widest == 0 {
        return String::new();
    }
    let cells = (count * WIDTH).div_ceil(widest);
    "#".repeat(cells)
}

fn print_json_report(report: &SummaryReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::serialization("Failed to serialize summary report", e))?;
    println!("{}", json);
    Ok(())
}
