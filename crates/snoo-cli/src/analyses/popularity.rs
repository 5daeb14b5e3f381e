//! Does subreddit popularity move submission scores?
//!
//! Popularity is the submission count of each row's subreddit. Median
//! split for the Mann-Whitney U comparison, then a tertile split on the
//! log-transformed popularity for the one-way ANOVA over low, medium and
//! high groups.

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
    let active = dataset.filter(filters::has_subreddit);
    info!(kept = active.len(), total = dataset.len(), "filtered rows with a subreddit");

    let popularity = active.subreddit_popularity();
    let scores = active.scores();

    let split = median_split(&popularity, &scores)?;
    overlaid_histograms(
        split.high.as_slice(),
        split.low.as_slice(),
        "high_subreddit_popularity_score",
        "low_subreddit_popularity_score",
        10,
        "Histogram of Scores for High and Low Subreddit_Popularity",
        "Scores",
        &graphs_dir.join("subreddit_popularity_hist.png"),
    )?;

    let mwu = mann_whitney_u(&split.high, &split.low)?;
    println!(
        "Mann-Whitney U test statistic: {}, p-value: {}",
        mwu.statistic, mwu.p_value
    );
    println!(
        "{}",
        report::two_group_conclusion(
            mwu.significance(),
            "popularity of subreddits",
            "score of a post"
        )
    );

    mean_bar_chart(
        &[
            ("High Subreddit_Popularity Scores", split.high.as_slice()),
            ("Low Subreddit_Popularity Scores", split.low.as_slice()),
        ],
        "Mean scores of Reddit posts of high/low subreddit_popularity groups",
        "Reddit Post Scores",
        &graphs_dir.join("subreddit_popularity.png"),
    )?;

    let normality = normality_test(&popularity)?;
    println!("p_value: {}", normality.p_value);
    println!(
        "{}",
        report::column_normality("subreddit_popularity", normality.p_value)
    );

    let log_popularity = math::log1p(&popularity);
    histogram(
        &log_popularity,
        50,
        "Histogram of log transformed subreddit_popularity",
        "Post Subreddit Popularity",
        &graphs_dir.join("subreddit_popularity_log_hist.png"),
    )?;

    let tertiles = tertile_split(&log_popularity, &scores)?;
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
        report::three_group_conclusion(
            anova.significance(),
            "popularity of subreddits",
            "score of a post"
        )
    );

    mean_bar_chart(
        &[
            ("High Popularity", tertiles.high.as_slice()),
            ("Medium Popularity", tertiles.medium.as_slice()),
            ("Low Popularity", tertiles.low.as_slice()),
        ],
        "Mean scores of Reddit posts of high/medium/low subreddit_popularity groups",
        "Reddit Post Scores",
        &graphs_dir.join("subreddit_popularity_anova.png"),
    )?;

    Ok(())
}
