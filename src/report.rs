//! Report generation pipeline
//!
//! Load runs, reduce them per thread count, derive scaling metrics, then
//! write charts, optional exports and the summary table.

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::input::load_runs;
use crate::metrics::{RunCollector, ScalingReport};
use crate::output::{CsvExporter, JsonExporter, SummaryTable};
use crate::visualization::{ChartRenderer, PngRenderer};
use std::io::Write;
use std::path::PathBuf;

/// CSV summary export file name
pub const SUMMARY_CSV_FILE: &str = "summary.csv";
/// JSON summary export file name
pub const SUMMARY_JSON_FILE: &str = "summary.json";

/// What a completed run produced
#[derive(Debug, Clone, Default)]
pub struct ReportOutcome {
    /// Per-thread summaries, ascending
    pub report: ScalingReport,
    /// Chart files written, empty when there was no data
    pub charts: Vec<PathBuf>,
    /// Summary export files written
    pub exports: Vec<PathBuf>,
}

/// Drives one report from input file to output directory
pub struct ReportGenerator<R = PngRenderer> {
    config: ReportConfig,
    renderer: R,
}

impl ReportGenerator<PngRenderer> {
    /// Create a generator drawing PNG charts
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            renderer: PngRenderer,
        }
    }
}

impl<R: ChartRenderer> ReportGenerator<R> {
    /// Create a generator with a custom chart renderer
    pub fn with_renderer(config: ReportConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// Get the configuration
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run the pipeline, writing human-readable output to `out`
    ///
    /// A missing input file fails before anything is created on disk.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ReportOutcome> {
        self.config.validate()?;

        let runs = load_runs(&self.config.input_path)?;
        let run_count = runs.len();
        let collector: RunCollector = runs.into_iter().collect();
        let report = ScalingReport::from(&collector);

        tracing::info!(
            "Aggregated {} runs into {} thread counts",
            run_count,
            report.groups.len()
        );
        if let Some(baseline) = report.baseline_time {
            tracing::debug!("Baseline time: {:.4}s", baseline);
        }

        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir)?;

        let mut outcome = ReportOutcome {
            report,
            ..Default::default()
        };

        if outcome.report.is_empty() {
            SummaryTable::write(&outcome.report, out)?;
            return Ok(outcome);
        }

        outcome.charts = self
            .renderer
            .render(&outcome.report, output_dir, self.config.chart_size)
            .map_err(|e| ReportError::Chart(format!("{:#}", e)))?;
        for chart in &outcome.charts {
            tracing::debug!("Wrote chart {}", chart.display());
        }
        writeln!(out, "Plots generated in '{}' directory", output_dir.display())?;

        if self.config.export_csv {
            let path = output_dir.join(SUMMARY_CSV_FILE);
            CsvExporter::export(&outcome.report, &path)?;
            writeln!(out, "CSV summary exported to: {}", path.display())?;
            outcome.exports.push(path);
        }

        if self.config.export_json {
            let path = output_dir.join(SUMMARY_JSON_FILE);
            JsonExporter::export(&outcome.report, &path)?;
            writeln!(out, "JSON summary exported to: {}", path.display())?;
            outcome.exports.push(path);
        }

        SummaryTable::write(&outcome.report, out)?;
        Ok(outcome)
    }
}
