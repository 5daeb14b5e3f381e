//! Bar charts of group means with value labels

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{PlotError, Result};
use crate::{palette_color, CHART_SIZE};

/// Bar chart of per-group means, one labeled bar per group, with the mean
/// value printed above each bar.
pub fn mean_bar_chart(
    groups: &[(&str, &[f64])],
    title: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    if groups.is_empty() {
        return Err(PlotError::InvalidData("no groups to plot".to_string()));
    }
    let mut means = Vec::with_capacity(groups.len());
    for (name, values) in groups {
        if values.is_empty() {
            return Err(PlotError::InvalidData(format!("group {name} is empty")));
        }
        means.push(values.iter().sum::<f64>() / values.len() as f64);
    }

    let y_max = means.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let y_min = means.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_top = if y_max > 0.0 { y_max * 1.15 } else { 1.0 };
    let y_bottom = if y_min < 0.0 { y_min * 1.15 } else { 0.0 };

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let n = groups.len() as f64;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(-0.5f64..(n - 0.5), y_bottom..y_top)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let labels: Vec<String> = groups.iter().map(|(name, _)| name.to_string()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(y_label)
        .y_label_style(("sans-serif", 25))
        .x_labels(groups.len())
        .x_label_style(("sans-serif", 25))
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 {
                labels.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .draw()
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .draw_series(means.iter().enumerate().map(|(i, &mean)| {
            let color = palette_color(i);
            Rectangle::new(
                [
                    (i as f64 - 0.35, mean.min(0.0)),
                    (i as f64 + 0.35, mean.max(0.0)),
                ],
                color.filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let label_style =
        TextStyle::from(("sans-serif", 22).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(means.iter().enumerate().map(|(i, &mean)| {
            Text::new(
                format!("{mean:.2}"),
                (i as f64, mean.max(0.0)),
                label_style.clone(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
