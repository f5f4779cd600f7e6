//! Visualization and plotting

pub mod efficiency;
pub mod execution_time;
pub mod memory;
pub mod speedup;

pub use efficiency::EfficiencyPlotter;
pub use execution_time::ExecutionTimePlotter;
pub use memory::MemoryPlotter;
pub use speedup::SpeedupPlotter;

use crate::metrics::ScalingReport;
use anyhow::{Context, Result};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Execution time chart file name
pub const EXECUTION_TIME_FILE: &str = "execution_time.png";
/// Speedup chart file name
pub const SPEEDUP_FILE: &str = "speedup.png";
/// Efficiency chart file name
pub const EFFICIENCY_FILE: &str = "efficiency.png";
/// Memory chart file name
pub const MEMORY_FILE: &str = "memory_usage.png";

/// Column-wise view of a report, one entry per thread count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub thread_counts: Vec<f64>,
    pub avg_times: Vec<f64>,
    pub std_times: Vec<f64>,
    pub speedups: Vec<f64>,
    pub efficiencies: Vec<f64>,
    pub memory_mb: Vec<f64>,
}

impl ChartSeries {
    pub fn from_report(report: &ScalingReport) -> Self {
        let mut series = Self::default();
        for group in report.iter() {
            series.thread_counts.push(group.thread_count as f64);
            series.avg_times.push(group.avg_time);
            series.std_times.push(group.std_time);
            series.speedups.push(group.speedup);
            series.efficiencies.push(group.efficiency);
            series.memory_mb.push(group.avg_memory_mb());
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.thread_counts.is_empty()
    }

    /// Pair thread counts with one metric column
    pub fn points(&self, values: &[f64]) -> Vec<(f64, f64)> {
        self.thread_counts
            .iter()
            .copied()
            .zip(values.iter().copied())
            .collect()
    }

    /// Ideal linear speedup: one unit of speedup per thread
    pub fn ideal_speedup(&self) -> Vec<(f64, f64)> {
        self.thread_counts.iter().map(|&t| (t, t)).collect()
    }

    /// `(threads, mean - std, mean, mean + std)` per thread count
    ///
    /// Bars are symmetric; anything below the axis is clipped when drawn.
    pub fn error_bars(&self) -> Vec<(f64, f64, f64, f64)> {
        self.thread_counts
            .iter()
            .zip(self.avg_times.iter().zip(&self.std_times))
            .map(|(&x, (&avg, &std))| (x, avg - std, avg, avg + std))
            .collect()
    }

    /// X axis covering every thread count with a little padding
    pub fn thread_range(&self) -> Range<f64> {
        let min = self.thread_counts.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .thread_counts
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        if !min.is_finite() || !max.is_finite() {
            return 0.0..1.0;
        }

        let pad = if max > min { (max - min) * 0.05 } else { 0.5 };
        (min - pad)..(max + pad)
    }
}

/// Y axis from zero to 10% above the largest value
pub fn value_range<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);

    if max > 0.0 {
        0.0..(max * 1.1)
    } else {
        0.0..1.0
    }
}

/// Something that turns a report into chart files
pub trait ChartRenderer {
    /// Render every chart into `output_dir`, returning the written paths
    fn render(
        &self,
        report: &ScalingReport,
        output_dir: &Path,
        size: (u32, u32),
    ) -> Result<Vec<PathBuf>>;
}

/// PNG charts drawn with plotters
#[derive(Debug, Clone, Copy, Default)]
pub struct PngRenderer;

impl ChartRenderer for PngRenderer {
    fn render(
        &self,
        report: &ScalingReport,
        output_dir: &Path,
        size: (u32, u32),
    ) -> Result<Vec<PathBuf>> {
        render_all(report, output_dir, size)
    }
}

/// Render all four charts into `output_dir`
///
/// Returns the written paths in a fixed order: execution time, speedup,
/// efficiency, memory.
pub fn render_all(
    report: &ScalingReport,
    output_dir: &Path,
    size: (u32, u32),
) -> Result<Vec<PathBuf>> {
    let series = ChartSeries::from_report(report);

    let time_path = output_dir.join(EXECUTION_TIME_FILE);
    ExecutionTimePlotter::plot(&series, &time_path, size)
        .with_context(|| format!("Failed to generate execution time chart: {}", time_path.display()))?;

    let speedup_path = output_dir.join(SPEEDUP_FILE);
    SpeedupPlotter::plot(&series, &speedup_path, size)
        .with_context(|| format!("Failed to generate speedup chart: {}", speedup_path.display()))?;

    let efficiency_path = output_dir.join(EFFICIENCY_FILE);
    EfficiencyPlotter::plot(&series, &efficiency_path, size).with_context(|| {
        format!("Failed to generate efficiency chart: {}", efficiency_path.display())
    })?;

    let memory_path = output_dir.join(MEMORY_FILE);
    MemoryPlotter::plot(&series, &memory_path, size)
        .with_context(|| format!("Failed to generate memory chart: {}", memory_path.display()))?;

    Ok(vec![time_path, speedup_path, efficiency_path, memory_path])
}
