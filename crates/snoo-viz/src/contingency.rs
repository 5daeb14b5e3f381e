//! Grouped contingency bar chart with an accompanying count table

use std::path::Path;

use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::{palette_color, CHART_SIZE};

/// Grouped bar chart of contingency counts: one bar cluster per row
/// label, one color per column label, with the raw counts tabulated
/// underneath the chart.
pub fn grouped_bar_with_table(
    row_labels: &[&str],
    col_labels: &[&str],
    counts: &[Vec<f64>],
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    if counts.len() != row_labels.len() {
        return Err(PlotError::InvalidData(format!(
            "{} rows of counts for {} row labels",
            counts.len(),
            row_labels.len()
        )));
    }
    for row in counts {
        if row.len() != col_labels.len() {
            return Err(PlotError::InvalidData(format!(
                "{} counts in a row for {} column labels",
                row.len(),
                col_labels.len()
            )));
        }
    }
    let y_max = counts
        .iter()
        .flatten()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Chart on top, count table below.
    let (chart_area, table_area) = root.split_vertically(620);

    let n_rows = row_labels.len() as f64;
    let mut chart = ChartBuilder::on(&chart_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(-0.5f64..(n_rows - 0.5), 0f64..y_max * 1.15)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let owned_rows: Vec<String> = row_labels.iter().map(|s| s.to_string()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .x_labels(row_labels.len())
        .x_label_style(("sans-serif", 25))
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 {
                owned_rows.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_desc(y_label)
        .y_label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let cluster_width = 0.8;
    let bar_width = cluster_width / col_labels.len() as f64;
    for (col, &col_label) in col_labels.iter().enumerate() {
        let color = palette_color(col);
        chart
            .draw_series(counts.iter().enumerate().map(|(row, row_counts)| {
                let x0 = row as f64 - cluster_width / 2.0 + col as f64 * bar_width;
                Rectangle::new(
                    [(x0, 0.0), (x0 + bar_width * 0.9, row_counts[col])],
                    color.filled(),
                )
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(col_label.to_string())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 22))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    draw_table(&table_area, row_labels, col_labels, counts)?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

fn draw_table<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    row_labels: &[&str],
    col_labels: &[&str],
    counts: &[Vec<f64>],
) -> Result<()> {
    let style = ("sans-serif", 22);
    let col_width = 180;
    let row_height = 36;
    let x0 = 120;
    let y0 = 20;

    for (col, label) in col_labels.iter().enumerate() {
        area.draw(&Text::new(
            label.to_string(),
            (x0 + (col as i32 + 1) * col_width, y0),
            style,
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }
    for (row, label) in row_labels.iter().enumerate() {
        let y = y0 + (row as i32 + 1) * row_height;
        area.draw(&Text::new(label.to_string(), (x0, y), style))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        for (col, value) in counts[row].iter().enumerate() {
            area.draw(&Text::new(
                format!("{value:.0}"),
                (x0 + (col as i32 + 1) * col_width, y),
                style,
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contingency.png");
        grouped_bar_with_table(
            &["High Scores", "Low Scores"],
            &["Positive", "Neutral", "Negative"],
            &[vec![120.0, 80.0, 40.0], vec![90.0, 100.0, 60.0]],
            "Sentiment on High vs Low Scores",
            "Reddit Scores",
            "Number of Scores in Sentiment Range",
            &path,
        )
        .unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_ragged_counts_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contingency.png");
        let err = grouped_bar_with_table(
            &["a", "b"],
            &["x", "y"],
            &[vec![1.0, 2.0], vec![1.0]],
            "t",
            "x",
            "y",
            &path,
        );
        assert!(err.is_err());
    }
}
