//! End-to-end runs of the analysis pipelines over a synthetic cleaned
//! dataset: build part files, run each analysis, check the charts land.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

const TEXTS: [&str; 3] = [
    "I love this wonderful tea, it is great and makes me happy.",
    "I hate this, it is a terrible and awful experience honestly.",
    "The kettle holds two liters of water and sits on the counter near the window in the kitchen, \
     which is where it has been for several years now.",
];

const TITLES: [&str; 4] = [
    "Quick tea note",
    "A longer reflection on brewing equipment",
    "Incomprehensibilities notwithstanding, a question",
    "Why do kettles whistle when they reach a rolling boil",
];

/// Rows with a skewed subreddit distribution (subreddit `s{j}` appears `j`
/// times), cycling hours, scores and texts.
fn write_dataset(dir: &Path) {
    let file = File::create(dir.join("part-00000-test-c000.json.gz")).unwrap();
    let mut enc = GzEncoder::new(file, Compression::default());

    let mut idx = 0usize;
    for j in 1..=12usize {
        for _ in 0..j {
            let hour = idx % 24;
            let day = 1 + idx / 24;
            let line = serde_json::json!({
                "subreddit": format!("s{j}"),
                "score": (idx * 37) % 101,
                "num_comments": idx % 7,
                "title": TITLES[idx % 4],
                "selftext": TEXTS[idx % 3],
                "datetime": format!("2016-11-{day:02}T{hour:02}:15:00Z"),
            });
            writeln!(enc, "{line}").unwrap();
            idx += 1;
        }
    }
    enc.finish().unwrap();
}

fn assert_charts(graphs_dir: &Path, names: &[&str]) {
    for name in names {
        let path = graphs_dir.join(name);
        assert!(path.is_file(), "expected chart {}", path.display());
        assert!(path.metadata().unwrap().len() > 0);
    }
}

#[test]
fn test_comments_pipeline() {
    let data = tempfile::tempdir().unwrap();
    let graphs = tempfile::tempdir().unwrap();
    write_dataset(data.path());

    snoo_cli::analyses::comments::run(data.path(), graphs.path()).unwrap();
    assert_charts(graphs.path(), &["num_comments.png", "num_comments_hist.png"]);
}

#[test]
fn test_post_length_pipeline() {
    let data = tempfile::tempdir().unwrap();
    let graphs = tempfile::tempdir().unwrap();
    write_dataset(data.path());

    snoo_cli::analyses::post_length::run(data.path(), graphs.path()).unwrap();
    assert_charts(
        graphs.path(),
        &[
            "post_length.png",
            "post_length_hist.png",
            "post_length_log_hist.png",
            "post_length_anova.png",
        ],
    );
}

#[test]
fn test_readability_pipeline() {
    let data = tempfile::tempdir().unwrap();
    let graphs = tempfile::tempdir().unwrap();
    write_dataset(data.path());

    snoo_cli::analyses::readability::run(data.path(), graphs.path()).unwrap();
    assert_charts(
        graphs.path(),
        &[
            "selftext_readability_bar.png",
            "title_readability_bar.png",
            "selftext_grade_bar.png",
            "title_grade_bar.png",
        ],
    );
}

#[test]
fn test_sentiment_pipeline() {
    let data = tempfile::tempdir().unwrap();
    let graphs = tempfile::tempdir().unwrap();
    write_dataset(data.path());

    snoo_cli::analyses::sentiment::run(data.path(), graphs.path()).unwrap();
    assert_charts(graphs.path(), &["sentiment_scores.png"]);
}

#[test]
fn test_popularity_pipeline() {
    let data = tempfile::tempdir().unwrap();
    let graphs = tempfile::tempdir().unwrap();
    write_dataset(data.path());

    snoo_cli::analyses::popularity::run(data.path(), graphs.path()).unwrap();
    assert_charts(
        graphs.path(),
        &[
            "subreddit_popularity.png",
            "subreddit_popularity_hist.png",
            "subreddit_popularity_log_hist.png",
            "subreddit_popularity_anova.png",
        ],
    );
}

#[test]
fn test_by_hour_pipeline() {
    let data = tempfile::tempdir().unwrap();
    let graphs = tempfile::tempdir().unwrap();
    write_dataset(data.path());

    snoo_cli::analyses::by_hour::run(data.path(), graphs.path()).unwrap();
    assert_charts(
        graphs.path(),
        &[
            "average_submission_by_hour.png",
            "residuals_submission_by_hour.png",
        ],
    );
}
