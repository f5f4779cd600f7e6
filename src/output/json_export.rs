//! JSON export functionality

use crate::error::Result;
use crate::metrics::ScalingReport;
use serde_json::{json, Value};
use std::path::Path;

pub struct JsonExporter;

impl JsonExporter {
    /// Build the JSON document for a report
    pub fn to_value(report: &ScalingReport) -> Value {
        let groups: Vec<_> = report
            .iter()
            .map(|g| {
                json!({
                    "threads": g.thread_count,
                    "runs": g.runs,
                    "avg_time_s": g.avg_time,
                    "std_time_s": g.std_time,
                    "speedup": g.speedup,
                    "efficiency_percent": g.efficiency,
                    "avg_memory_kb": g.avg_memory_kb,
                    "avg_memory_mb": g.avg_memory_mb(),
                })
            })
            .collect();

        json!({
            "baseline_time_s": report.baseline_time,
            "groups": groups,
        })
    }

    /// Export the report to a pretty-printed JSON file
    pub fn export(report: &ScalingReport, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &Self::to_value(report))?;
        Ok(())
    }
}
