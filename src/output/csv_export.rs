//! CSV export functionality

use crate::error::Result;
use crate::metrics::ScalingReport;
use csv::Writer;
use std::io::Write;
use std::path::Path;

pub struct CsvExporter;

impl CsvExporter {
    /// Export the per-thread summary to a CSV file
    pub fn export(report: &ScalingReport, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        Self::write(report, file)
    }

    /// Write the per-thread summary to any writer
    pub fn write<W: Write>(report: &ScalingReport, out: W) -> Result<()> {
        let mut wtr = Writer::from_writer(out);

        wtr.write_record([
            "threads",
            "runs",
            "avg_time_s",
            "std_time_s",
            "speedup",
            "efficiency_percent",
            "avg_memory_kb",
            "avg_memory_mb",
        ])?;

        for group in report.iter() {
            wtr.write_record(&[
                group.thread_count.to_string(),
                group.runs.to_string(),
                format!("{:.6}", group.avg_time),
                format!("{:.6}", group.std_time),
                format!("{:.6}", group.speedup),
                format!("{:.6}", group.efficiency),
                format!("{:.2}", group.avg_memory_kb),
                format!("{:.6}", group.avg_memory_mb()),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::GroupSummary;

    #[test]
    fn test_write_summary() {
        let report = ScalingReport::from_groups(vec![
            GroupSummary {
                thread_count: 1,
                runs: 3,
                avg_time: 8.0,
                std_time: 0.25,
                avg_memory_kb: 2048.0,
                speedup: 0.0,
                efficiency: 0.0,
            },
            GroupSummary {
                thread_count: 2,
                runs: 3,
                avg_time: 4.0,
                std_time: 0.5,
                avg_memory_kb: 3072.0,
                speedup: 0.0,
                efficiency: 0.0,
            },
        ]);

        let mut out = Vec::new();
        CsvExporter::write(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("threads,runs,avg_time_s"));
        assert_eq!(
            lines[2],
            "2,3,4.000000,0.500000,2.000000,100.000000,3072.00,3.000000"
        );
    }
}
