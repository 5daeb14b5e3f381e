//! Does selftext length move submission scores?
//!
//! Median split on character length for the Mann-Whitney U comparison,
//! then a tertile split on the log-transformed length for the one-way
//! ANOVA. The raw length column is far from normal; log1p gets close
//! enough to justify the three-group comparison.

use std::path::Path;

use anyhow::Result;
use snoo_core::math;
use snoo_core::split::{median_split, tertile_split};
use snoo_data::{filters, load_dir};
use snoo_infer::{mann_whitney_u, normality_test, one_way_anova};
use snoo_viz::{histogram, mean_bar_chart, overlaid_histograms};
use tracing::info;

use crate::report;

pub fn run(data_dir: &Path, graphs_dir: &Path) -> Result<()> {
    super::ensure_graphs_dir(graphs_dir)?;

    let dataset = load_dir(data_dir)?;
    let active = dataset.filter(filters::has_meaningful_selftext);
    info!(kept = active.len(), total = dataset.len(), "filtered rows with selftext");

    let lengths = active.selftext_lengths();
    let scores = active.scores();

    // Two-group comparison on the raw length
    let split = median_split(&lengths, &scores)?;
    overlaid_histograms(
        split.high.as_slice(),
        split.low.as_slice(),
        "high_post_length_score",
        "low_post_length_score",
        10,
        "Histogram of Scores for High and Low Post_Length",
        "Scores",
        &graphs_dir.join("post_length_hist.png"),
    )?;

    let mwu = mann_whitney_u(&split.high, &split.low)?;
    println!(
        "Mann-Whitney U test statistic: {}, p-value: {}",
        mwu.statistic, mwu.p_value
    );
    println!(
        "{}",
        report::two_group_conclusion(mwu.significance(), "length of posts", "score of a post")
    );

    mean_bar_chart(
        &[
            ("High Post Length", split.high.as_slice()),
            ("Low Post Length Scores", split.low.as_slice()),
        ],
        "Mean scores of Reddit posts of high/low post_length groups",
        "Reddit Post Scores",
        &graphs_dir.join("post_length.png"),
    )?;

    // Normality of the raw column, then the log transform for ANOVA
    let normality = normality_test(&lengths)?;
    println!("p_value: {}", normality.p_value);
    println!("{}", report::column_normality("post_length", normality.p_value));

    let log_lengths = math::log1p(&lengths);
    histogram(
        &log_lengths,
        50,
        "Histogram of log transformed post_length",
        "Post Length",
        &graphs_dir.join("post_length_log_hist.png"),
    )?;

    let tertiles = tertile_split(&log_lengths, &scores)?;
    let anova = one_way_anova(&[
        tertiles.low.as_slice(),
        tertiles.medium.as_slice(),
        tertiles.high.as_slice(),
    ])?;
    println!(
        "ANOVA one-way test statistic: {}, p-value: {}",
        anova.f_statistic, anova.p_value
    );
    println!(
        "{}",
        report::three_group_conclusion(anova.significance(), "length of posts", "score of a post")
    );

    mean_bar_chart(
        &[
            ("High Post Length", tertiles.high.as_slice()),
            ("Medium Post Length", tertiles.medium.as_slice()),
            ("Low Post Length", tertiles.low.as_slice()),
        ],
        "Mean scores of Reddit posts of high/medium/low post_length groups",
        "Reddit Post Scores",
        &graphs_dir.join("post_length_anova.png"),
    )?;

    Ok(())
}
