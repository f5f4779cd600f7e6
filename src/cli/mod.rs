//! CLI argument parsing and command handling

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::report::ReportGenerator;
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

/// Thread-scaling report: speedup, efficiency and memory charts from benchmark runs
///
/// Reads performance_data/summary.csv and writes charts to plots/.
#[derive(Parser, Debug, Default)]
#[command(name = "scaling-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also export the summary table to plots/summary.csv
    #[arg(long)]
    pub csv: bool,

    /// Also export the summary table to plots/summary.json
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Configuration for this invocation; paths are always the defaults
    pub fn config(&self) -> ReportConfig {
        ReportConfig::default()
            .with_csv_export(self.csv)
            .with_json_export(self.json)
    }

    /// Generate the report, returning the process exit code
    ///
    /// The report goes to stdout; a missing input is reported on stderr
    /// with exit code 1.
    pub fn run(&self) -> Result<ExitCode> {
        let config = self.config();
        tracing::info!("Reading benchmark runs from {}", config.input_path.display());

        let generator = ReportGenerator::new(config);
        let mut stdout = std::io::stdout().lock();

        match generator.run(&mut stdout) {
            Ok(outcome) => {
                tracing::info!(
                    "Report complete: {} thread counts, {} charts",
                    outcome.report.groups.len(),
                    outcome.charts.len()
                );
                Ok(ExitCode::SUCCESS)
            }
            Err(ReportError::InputMissing { path }) => {
                eprintln!("Error: Could not find {}", path.display());
                eprintln!("Please run the performance tests first or check the file path.");
                Ok(ExitCode::FAILURE)
            }
            Err(err) => Err(err).context("Failed to generate performance report"),
        }
    }
}
