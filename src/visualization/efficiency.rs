//! Parallel efficiency chart

use super::{value_range, ChartSeries};
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

pub struct EfficiencyPlotter;

impl EfficiencyPlotter {
    pub fn plot(series: &ChartSeries, path: &Path, size: (u32, u32)) -> Result<()> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;

        if series.is_empty() {
            return Ok(());
        }

        let points = series.points(&series.efficiencies);

        let mut chart = ChartBuilder::on(&root)
            .caption("Efficiency vs Number of Threads", ("sans-serif", 30))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                series.thread_range(),
                value_range(series.efficiencies.iter().copied()),
            )?;

        chart
            .configure_mesh()
            .x_desc("Number of Threads")
            .y_desc("Efficiency (%)")
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()?;

        chart.draw_series(LineSeries::new(points.clone(), &GREEN))?;
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, GREEN.filled())),
        )?;

        root.present()?;
        Ok(())
    }
}
