//! Frequency histograms: single and two-group overlays

use std::path::Path;

use plotters::prelude::*;
use snoo_core::fixed_width_bins;

use crate::error::{PlotError, Result};
use crate::{LIGHT_CORAL, SKY_BLUE, CHART_SIZE};

/// Single-series frequency histogram.
pub fn histogram(
    data: &[f64],
    bins: usize,
    title: &str,
    x_label: &str,
    output_path: &Path,
) -> Result<()> {
    let binned =
        fixed_width_bins(data, bins).map_err(|e| PlotError::InvalidData(e.to_string()))?;

    let x_min = binned.first().map(|b| b.left).unwrap_or(0.0);
    let x_max = binned.last().map(|b| b.right).unwrap_or(1.0);
    let y_max = binned.iter().map(|b| b.count).max().unwrap_or(1) as f64;

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_min..x_max.max(x_min + 1.0), 0.0..y_max * 1.1)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .x_label_style(("sans-serif", 25))
        .y_desc("Frequency")
        .y_label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .draw_series(binned.iter().map(|bin| {
            Rectangle::new(
                [(bin.left, 0.0), (bin.right, bin.count as f64)],
                SKY_BLUE.filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Two translucent histograms over a shared axis, with a legend. Both
/// series are binned over the combined range so the bars line up.
pub fn overlaid_histograms(
    first: &[f64],
    second: &[f64],
    first_label: &str,
    second_label: &str,
    bins: usize,
    title: &str,
    x_label: &str,
    output_path: &Path,
) -> Result<()> {
    if first.is_empty() || second.is_empty() {
        return Err(PlotError::InvalidData(
            "both groups need at least one value".to_string(),
        ));
    }

    let first_bins =
        fixed_width_bins(first, bins).map_err(|e| PlotError::InvalidData(e.to_string()))?;
    let second_bins =
        fixed_width_bins(second, bins).map_err(|e| PlotError::InvalidData(e.to_string()))?;

    let x_min = first_bins[0].left.min(second_bins[0].left);
    let x_max = first_bins
        .last()
        .map(|b| b.right)
        .unwrap_or(1.0)
        .max(second_bins.last().map(|b| b.right).unwrap_or(1.0));
    let y_max = first_bins
        .iter()
        .chain(&second_bins)
        .map(|b| b.count)
        .max()
        .unwrap_or(1) as f64;

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_min..x_max.max(x_min + 1.0), 0.0..y_max * 1.1)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .x_label_style(("sans-serif", 25))
        .y_desc("Frequency")
        .y_label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .draw_series(first_bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.left, 0.0), (bin.right, bin.count as f64)],
                SKY_BLUE.mix(0.5).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(first_label.to_string())
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], SKY_BLUE.filled()));

    chart
        .draw_series(second_bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.left, 0.0), (bin.right, bin.count as f64)],
                LIGHT_CORAL.mix(0.5).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(second_label.to_string())
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], LIGHT_CORAL.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 22))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
