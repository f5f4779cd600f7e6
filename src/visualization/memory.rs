//! Memory usage chart

use super::{value_range, ChartSeries};
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

pub struct MemoryPlotter;

impl MemoryPlotter {
    /// Plot mean memory per thread count, in megabytes
    pub fn plot(series: &ChartSeries, path: &Path, size: (u32, u32)) -> Result<()> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;

        if series.is_empty() {
            return Ok(());
        }

        let points = series.points(&series.memory_mb);

        let mut chart = ChartBuilder::on(&root)
            .caption("Memory Usage vs Number of Threads", ("sans-serif", 30))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                series.thread_range(),
                value_range(series.memory_mb.iter().copied()),
            )?;

        chart
            .configure_mesh()
            .x_desc("Number of Threads")
            .y_desc("Memory Usage (MB)")
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;

        chart.draw_series(LineSeries::new(points.clone(), &MAGENTA))?;
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, MAGENTA.filled())),
        )?;

        root.present()?;
        Ok(())
    }
}
