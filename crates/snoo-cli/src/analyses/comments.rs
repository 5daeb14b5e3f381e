//! Does comment volume move submission scores?
//!
//! Median split on comment count, Mann-Whitney U over the two groups'
//! scores.

use std::path::Path;

use anyhow::Result;
use snoo_core::split::median_split;
use snoo_data::{filters, load_dir};
use snoo_infer::mann_whitney_u;
use snoo_viz::{mean_bar_chart, overlaid_histograms};
use tracing::info;

use crate::report;

pub fn run(data_dir: &Path, graphs_dir: &Path) -> Result<()> {
    super::ensure_graphs_dir(graphs_dir)?;

    let dataset = load_dir(data_dir)?;
    let active = dataset.filter(|s| filters::min_comments(s, 1));
    info!(kept = active.len(), total = dataset.len(), "filtered rows with comments");

    let comments = active.comment_counts();
    let scores = active.scores();
    let split = median_split(&comments, &scores)?;

    overlaid_histograms(
        split.high.as_slice(),
        split.low.as_slice(),
        "high_num_comments_score",
        "low_num_comments_score",
        10,
        "Histogram of high and low num_comments scores",
        "Scores",
        &graphs_dir.join("num_comments_hist.png"),
    )?;

    let result = mann_whitney_u(&split.high, &split.low)?;
    println!(
        "Mann-Whitney U test statistic: {}, p-value: {}",
        result.statistic, result.p_value
    );
    println!(
        "{}",
        report::two_group_conclusion(
            result.significance(),
            "number of comments",
            "score of a post"
        )
    );

    mean_bar_chart(
        &[
            ("High Num_comment Scores", split.high.as_slice()),
            ("Low Num_comment Scores", split.low.as_slice()),
        ],
        "Mean scores of Reddit posts of high/low num_comments groups",
        "Reddit Post Scores",
        &graphs_dir.join("num_comments.png"),
    )?;

    Ok(())
}
