//! Is sentiment associated with the score band?
//!
//! Compound polarity per submission, three-way categorization, then a
//! chi-squared independence test of sentiment category against the
//! high/low score band. The band threshold is the mean score, ties high.

use std::path::Path;

use anyhow::Result;
use snoo_core::math;
use snoo_data::{filters, load_dir};
use snoo_infer::chi2_independence;
use snoo_text::{SentimentAnalyzer, SentimentCategory};
use snoo_viz::grouped_bar_with_table;
use tracing::info;

const CATEGORIES: [SentimentCategory; 3] = [
    SentimentCategory::Positive,
    SentimentCategory::Neutral,
    SentimentCategory::Negative,
];

pub fn run(data_dir: &Path, graphs_dir: &Path) -> Result<()> {
    super::ensure_graphs_dir(graphs_dir)?;

    let dataset = load_dir(data_dir)?;
    let active = dataset
        .filter(filters::has_meaningful_selftext)
        .filter(filters::has_meaningful_title);
    info!(kept = active.len(), total = dataset.len(), "scoring sentiment");

    let analyzer = SentimentAnalyzer::new();
    let title_compound = active.project(|s| analyzer.compound(s.title.as_deref().unwrap_or_default()));
    let selftext_compound =
        active.project(|s| analyzer.compound(s.selftext.as_deref().unwrap_or_default()));
    let categories: Vec<SentimentCategory> = selftext_compound
        .iter()
        .map(|&c| SentimentCategory::from_compound(c))
        .collect();

    println!(
        "Mean compound sentiment: title = {:.4}, selftext = {:.4}",
        math::mean(&title_compound)?,
        math::mean(&selftext_compound)?
    );

    // Cross-tabulate score band against sentiment category.
    let scores = active.scores();
    let mean_score = math::mean(&scores)?;
    let mut counts = [[0.0f64; 3]; 2]; // rows: high band, low band
    for (&score, category) in scores.iter().zip(&categories) {
        let band = usize::from(score < mean_score); // 0 = high, 1 = low
        let col = CATEGORIES
            .iter()
            .position(|c| c == category)
            .unwrap_or_default();
        counts[band][col] += 1.0;
    }

    let table: Vec<Vec<f64>> = counts.iter().map(|row| row.to_vec()).collect();
    let result = chi2_independence(&table)?;

    println!("Result of Chi:");
    println!(
        "statistic: {}, dof: {}, p-value: {}",
        result.statistic, result.dof, result.p_value
    );
    println!("expected frequencies:");
    for row in &result.expected {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.2}")).collect();
        println!("  [{}]", cells.join(", "));
    }

    grouped_bar_with_table(
        &["High Scores", "Low Scores"],
        &["Positive", "Neutral", "Negative"],
        &table,
        "Sentiment on High vs Low Scores",
        "Reddit Scores",
        "Number of Scores in Sentiment Range",
        &graphs_dir.join("sentiment_scores.png"),
    )?;
    println!("Graph saved to folder.");

    Ok(())
}
