//! Do readability and grade level move submission scores?
//!
//! Four derived features (reading ease and grade level, for title and
//! selftext), each correlated against the score, median-split, checked
//! for normality and compared with Welch's t-test.

use std::path::Path;

use anyhow::Result;
use snoo_core::split::median_split;
use snoo_data::{filters, load_dir, Dataset};
use snoo_infer::{normality_test, pearson_r, welch_t_test};
use snoo_text::{flesch_kincaid_grade, flesch_reading_ease};
use snoo_viz::mean_bar_chart;
use tracing::info;

use crate::report;

const CORRELATION_THRESHOLD: f64 = 0.1;

struct Feature {
    name: &'static str,
    values: Vec<f64>,
    chart_title: &'static str,
    high_label: &'static str,
    low_label: &'static str,
    file: &'static str,
}

fn derive_features(active: &Dataset) -> Vec<Feature> {
    vec![
        Feature {
            name: "selftext_readability",
            values: active.project(|s| flesch_reading_ease(s.selftext.as_deref().unwrap_or_default())),
            chart_title: "Mean scores by selftext readability",
            high_label: "High Selftext Readability",
            low_label: "Low Selftext Readability",
            file: "selftext_readability_bar.png",
        },
        Feature {
            name: "title_readability",
            values: active.project(|s| flesch_reading_ease(s.title.as_deref().unwrap_or_default())),
            chart_title: "Mean scores by Title readability",
            high_label: "High Title Readability",
            low_label: "Low Title Readability",
            file: "title_readability_bar.png",
        },
        Feature {
            name: "selftext_grade",
            values: active.project(|s| flesch_kincaid_grade(s.selftext.as_deref().unwrap_or_default())),
            chart_title: "Mean scores by selftext grade",
            high_label: "High Selftext Grade",
            low_label: "Low Selftext Grade",
            file: "selftext_grade_bar.png",
        },
        Feature {
            name: "title_grade",
            values: active.project(|s| flesch_kincaid_grade(s.title.as_deref().unwrap_or_default())),
            chart_title: "Mean scores by title grade",
            high_label: "High Title Grade",
            low_label: "Low Title Grade",
            file: "title_grade_bar.png",
        },
    ]
}

pub fn run(data_dir: &Path, graphs_dir: &Path) -> Result<()> {
    super::ensure_graphs_dir(graphs_dir)?;

    let dataset = load_dir(data_dir)?;
    let active = dataset
        .filter(filters::has_meaningful_selftext)
        .filter(filters::has_meaningful_title);
    info!(kept = active.len(), total = dataset.len(), "filtered rows with text");

    let scores = active.scores();
    let features = derive_features(&active);

    // Correlation of each feature against the score
    for feature in &features {
        let r = pearson_r(&scores, &feature.values)?;
        println!("Correlation between score and {}: {r}", feature.name);
        println!("{}", report::correlation_band(r, CORRELATION_THRESHOLD));
    }

    // Median split per feature, normality per group, then Welch's t
    for feature in &features {
        let split = median_split(&feature.values, &scores)?;

        for (suffix, group) in [("high", &split.high), ("low", &split.low)] {
            let normality = normality_test(group)?;
            println!(
                "{}_{suffix}_p = {}:\n {}",
                feature.name,
                normality.p_value,
                report::normality_band(normality.verdict())
            );
        }

        let ttest = welch_t_test(&split.high, &split.low)?;
        println!(
            "high_{0} vs low_{0}:\n {1}",
            feature.name,
            report::ttest_band(ttest.significance())
        );

        mean_bar_chart(
            &[
                (feature.high_label, split.high.as_slice()),
                (feature.low_label, split.low.as_slice()),
            ],
            feature.chart_title,
            "Scores",
            &graphs_dir.join(feature.file),
        )?;
    }

    Ok(())
}
