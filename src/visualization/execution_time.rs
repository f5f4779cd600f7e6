//! Execution time chart with standard-deviation error bars

use super::{value_range, ChartSeries};
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

pub struct ExecutionTimePlotter;

impl ExecutionTimePlotter {
    /// Plot mean execution time per thread count, ±1 std dev
    pub fn plot(series: &ChartSeries, path: &Path, size: (u32, u32)) -> Result<()> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;

        if series.is_empty() {
            return Ok(());
        }

        let points = series.points(&series.avg_times);
        let upper = series
            .avg_times
            .iter()
            .zip(&series.std_times)
            .map(|(avg, std)| avg + std);

        let mut chart = ChartBuilder::on(&root)
            .caption("Average Execution Time vs Number of Threads", ("sans-serif", 30))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(series.thread_range(), value_range(upper))?;

        chart
            .configure_mesh()
            .x_desc("Number of Threads")
            .y_desc("Execution Time (seconds)")
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;

        chart.draw_series(LineSeries::new(points.clone(), &BLUE))?;

        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
        )?;

        chart.draw_series(series.error_bars().into_iter().map(|(x, low, avg, high)| {
            ErrorBar::new_vertical(x, low, avg, high, BLUE.filled(), 10)
        }))?;

        root.present()?;
        Ok(())
    }
}
