//! Speedup chart against the ideal linear reference

use super::{value_range, ChartSeries};
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

pub struct SpeedupPlotter;

impl SpeedupPlotter {
    /// Plot measured speedup and the y = threads reference line
    pub fn plot(series: &ChartSeries, path: &Path, size: (u32, u32)) -> Result<()> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;

        if series.is_empty() {
            return Ok(());
        }

        let actual = series.points(&series.speedups);
        let ideal = series.ideal_speedup();
        let y_range = value_range(
            series
                .speedups
                .iter()
                .chain(&series.thread_counts)
                .copied(),
        );

        let mut chart = ChartBuilder::on(&root)
            .caption("Speedup vs Number of Threads", ("sans-serif", 30))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(series.thread_range(), y_range)?;

        chart
            .configure_mesh()
            .x_desc("Number of Threads")
            .y_desc("Speedup")
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;

        chart
            .draw_series(LineSeries::new(actual.clone(), &BLUE))?
            .label("Actual Speedup")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart.draw_series(
            actual
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
        )?;

        chart
            .draw_series(DashedLineSeries::new(ideal, 8, 6, RED.stroke_width(1)))?
            .label("Ideal Linear Speedup")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}
