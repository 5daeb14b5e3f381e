//! Does posting hour trend with the average score?
//!
//! Timestamps are shifted from UTC to a fixed UTC-8 offset before the
//! hour is extracted, then a simple linear regression is fitted to the
//! 24 hourly mean scores.

use std::path::Path;

use anyhow::{bail, Result};
use chrono::{FixedOffset, Timelike};
use snoo_data::{filters, load_dir};
use snoo_infer::linear_regression;
use snoo_viz::{histogram, trend_with_fit};
use tracing::info;

const HOURS: usize = 24;

pub fn run(data_dir: &Path, graphs_dir: &Path) -> Result<()> {
    super::ensure_graphs_dir(graphs_dir)?;

    let dataset = load_dir(data_dir)?;
    let active = dataset.filter(filters::has_datetime);
    info!(kept = active.len(), total = dataset.len(), "filtered rows with timestamps");

    let pst = FixedOffset::west_opt(8 * 3600).expect("UTC-8 is a valid offset");

    let mut sums = [0.0f64; HOURS];
    let mut counts = [0usize; HOURS];
    for sub in active.iter() {
        if let Some(dt) = sub.datetime {
            let hour = dt.with_timezone(&pst).hour() as usize;
            sums[hour] += sub.score as f64;
            counts[hour] += 1;
        }
    }
    if let Some(empty) = counts.iter().position(|&c| c == 0) {
        bail!("no submissions in hour {empty}, cannot fit an hourly trend");
    }

    let averages: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(&sum, &count)| sum / count as f64)
        .collect();

    let hours: Vec<f64> = (0..HOURS).map(|h| h as f64).collect();
    let fit = linear_regression(&hours, &averages)?;

    trend_with_fit(
        &averages,
        fit.slope,
        fit.intercept,
        "Average Submission Score in Each Hour",
        "Hours (24) - PST",
        "Average Scores",
        &graphs_dir.join("average_submission_by_hour.png"),
    )?;
    println!("Plots have been saved into folder.");

    println!("p-value: {}", fit.p_value);
    println!("r-value: {}", fit.r_value);
    println!("r-value squared: {}", fit.r_squared());

    let residuals: Vec<f64> = averages
        .iter()
        .enumerate()
        .map(|(hour, &avg)| avg - fit.predict(hour as f64))
        .collect();
    histogram(
        &residuals,
        10,
        "Residuals of the hourly score fit",
        "Residual",
        &graphs_dir.join("residuals_submission_by_hour.png"),
    )?;

    Ok(())
}
