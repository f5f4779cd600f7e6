//! Per-thread-count aggregation and scaling metrics

use crate::input::RunRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kilobytes per megabyte
pub const KB_PER_MB: f64 = 1024.0;

/// Reduced statistics for one distinct thread count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Number of worker threads
    pub thread_count: i64,
    /// Number of runs reduced into this summary
    pub runs: usize,
    /// Mean elapsed time in seconds
    pub avg_time: f64,
    /// Population standard deviation of elapsed time
    pub std_time: f64,
    /// Mean memory in kilobytes
    pub avg_memory_kb: f64,
    /// Baseline time divided by this group's mean time
    pub speedup: f64,
    /// Speedup per thread, in percent
    pub efficiency: f64,
}

impl GroupSummary {
    /// Mean memory in megabytes
    pub fn avg_memory_mb(&self) -> f64 {
        self.avg_memory_kb / KB_PER_MB
    }
}

/// Collector grouping runs by thread count
#[derive(Debug, Clone, Default)]
pub struct RunCollector {
    groups: HashMap<i64, Vec<RunRecord>>,
}

impl RunCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a run to the group for its thread count
    pub fn add(&mut self, run: RunRecord) {
        self.groups.entry(run.thread_count).or_default().push(run);
    }

    /// Number of distinct thread counts seen
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no runs were collected
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Reduce each group to mean/std of time and mean memory
    ///
    /// Summaries come back in no particular order, with speedup and
    /// efficiency still zero. See [`ScalingReport::from_groups`].
    pub fn aggregate(&self) -> Vec<GroupSummary> {
        self.groups
            .iter()
            .map(|(&thread_count, runs)| {
                let times: Vec<f64> = runs.iter().map(|r| r.elapsed_secs).collect();
                let memory: Vec<f64> = runs.iter().map(|r| r.memory_kb as f64).collect();

                GroupSummary {
                    thread_count,
                    runs: runs.len(),
                    avg_time: mean(&times),
                    std_time: std_dev(&times),
                    avg_memory_kb: mean(&memory),
                    speedup: 0.0,
                    efficiency: 0.0,
                }
            })
            .collect()
    }
}

impl FromIterator<RunRecord> for RunCollector {
    fn from_iter<I: IntoIterator<Item = RunRecord>>(iter: I) -> Self {
        let mut collector = Self::new();
        for run in iter {
            collector.add(run);
        }
        collector
    }
}

/// Group summaries sorted by thread count, with derived metrics filled in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScalingReport {
    /// Mean time every speedup is measured against
    pub baseline_time: Option<f64>,
    /// One entry per thread count, ascending
    pub groups: Vec<GroupSummary>,
}

impl ScalingReport {
    /// Sort the groups and compute speedup and efficiency
    ///
    /// The baseline is the single-thread group's mean time, or the
    /// smallest thread count's when no single-thread runs exist.
    pub fn from_groups(mut groups: Vec<GroupSummary>) -> Self {
        groups.sort_by_key(|g| g.thread_count);

        let baseline_time = groups
            .iter()
            .find(|g| g.thread_count == 1)
            .or_else(|| groups.first())
            .map(|g| g.avg_time);

        if let Some(baseline) = baseline_time {
            for group in &mut groups {
                group.speedup = if group.avg_time > 0.0 {
                    baseline / group.avg_time
                } else {
                    0.0
                };
                group.efficiency = if group.thread_count > 0 {
                    group.speedup / group.thread_count as f64 * 100.0
                } else {
                    0.0
                };
            }
        }

        Self {
            baseline_time,
            groups,
        }
    }

    /// Check if there is anything to report
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get an iterator over the groups in ascending thread order
    pub fn iter(&self) -> impl Iterator<Item = &GroupSummary> {
        self.groups.iter()
    }
}

impl From<&RunCollector> for ScalingReport {
    fn from(collector: &RunCollector) -> Self {
        Self::from_groups(collector.aggregate())
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by N)
fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
