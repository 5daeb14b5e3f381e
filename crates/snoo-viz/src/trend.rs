//! Trend plot: per-bucket averages with a regression fit line

use std::path::Path;

use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::{LIGHT_CORAL, CHART_SIZE};

/// Plot bucket averages as connected points with the fitted line overlaid.
/// The x axis is the bucket index (0..n), one tick per bucket.
pub fn trend_with_fit(
    averages: &[f64],
    slope: f64,
    intercept: f64,
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    if averages.len() < 2 {
        return Err(PlotError::InvalidData(
            "trend plot needs at least two buckets".to_string(),
        ));
    }

    let n = averages.len();
    let y_max = averages
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(intercept)
        .max(slope * (n - 1) as f64 + intercept)
        .max(1.0);

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(0f64..(n - 1) as f64, 0f64..y_max * 1.1)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .x_labels(n)
        .x_label_style(("sans-serif", 25))
        .x_label_formatter(&|x| format!("{}", x.round() as i64))
        .y_desc(y_label)
        .y_label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // Averages: filled markers joined by a soft line
    chart
        .draw_series(LineSeries::new(
            averages.iter().enumerate().map(|(i, &y)| (i as f64, y)),
            BLUE.mix(0.6).stroke_width(3),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(
            averages
                .iter()
                .enumerate()
                .map(|(i, &y)| Circle::new((i as f64, y), 6, BLUE.filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Fit line over the full bucket range
    chart
        .draw_series(LineSeries::new(
            (0..n).map(|i| (i as f64, slope * i as f64 + intercept)),
            LIGHT_CORAL.stroke_width(3),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
