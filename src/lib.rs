//! Scaling Report - thread-scaling analysis for benchmark runs
//!
//! Reads a CSV of benchmark runs (thread count, elapsed time, memory),
//! reduces them per thread count and derives speedup and parallel
//! efficiency against the single-thread baseline.
//!
//! # Architecture
//!
//! - **Input**: CSV loading and elapsed-time parsing
//! - **Metrics**: Per-thread aggregation and scaling metrics
//! - **Visualization**: Execution time, speedup, efficiency and memory charts
//! - **Output**: Summary table and CSV/JSON exports
//! - **Report**: The pipeline tying them together
//!
//! # Example
//!
//! ```rust,no_run
//! use scaling_report::{ReportConfig, ReportGenerator};
//!
//! fn main() -> anyhow::Result<()> {
//!     let generator = ReportGenerator::new(ReportConfig::default());
//!     let outcome = generator.run(&mut std::io::stdout())?;
//!     println!("{} charts written", outcome.charts.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod output;
pub mod report;
pub mod visualization;

// Re-export commonly used types
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use input::{load_runs, parse_time, RunRecord};
pub use metrics::{GroupSummary, RunCollector, ScalingReport};
pub use output::{CsvExporter, JsonExporter, SummaryTable};
pub use report::{ReportGenerator, ReportOutcome};
pub use visualization::{ChartRenderer, PngRenderer};
