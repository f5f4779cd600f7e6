//! Fixed-width summary table

use crate::metrics::{GroupSummary, ScalingReport};
use std::io::{self, Write};

/// Printed instead of the table when there were no runs
pub const NO_DATA_MESSAGE: &str = "No data available for analysis";

const RULE_WIDTH: usize = 80;

pub struct SummaryTable;

impl SummaryTable {
    /// Header line, padded to the column widths
    pub fn header() -> String {
        format!(
            "{:<8} {:<12} {:<10} {:<14} {:<10}",
            "Threads", "Avg Time(s)", "Speedup", "Efficiency(%)", "Memory(MB)"
        )
    }

    /// One table row; rounding to two decimals happens only here
    pub fn row(group: &GroupSummary) -> String {
        format!(
            "{:<8} {:<12.2} {:<10.2} {:<14.2} {:<10.2}",
            group.thread_count,
            group.avg_time,
            group.speedup,
            group.efficiency,
            group.avg_memory_mb()
        )
    }

    /// Write the titled table, or the no-data line for an empty report
    pub fn write<W: Write>(report: &ScalingReport, out: &mut W) -> io::Result<()> {
        if report.is_empty() {
            writeln!(out, "{}", NO_DATA_MESSAGE)?;
            return Ok(());
        }

        let rule = "-".repeat(RULE_WIDTH);
        writeln!(out, "\nPerformance Summary:")?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", Self::header())?;
        writeln!(out, "{}", rule)?;
        for group in report.iter() {
            writeln!(out, "{}", Self::row(group))?;
        }
        Ok(())
    }
}
