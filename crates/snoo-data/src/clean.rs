//! Bulk cleaning and sampling of raw Reddit dumps
//!
//! Single-process rendition of the gather/clean job: Bernoulli-sample the
//! raw rows, derive word counts, drop rows failing the validity predicate,
//! convert the epoch timestamp, project to the kept column set, cap the
//! output and write one gzip JSON-lines part file with a Spark-style name.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use snoo_core::{Error, Result};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::filters::{is_meaningful_text, word_count};

/// Options for one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Bernoulli sampling fraction applied to the raw rows.
    pub sample_fraction: f64,
    /// Hard cap on rows written per invocation.
    pub row_limit: usize,
    /// Seed for the sampler; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            sample_fraction: 0.3,
            row_limit: 25_000,
            seed: None,
        }
    }
}

/// Counters reported after a cleaning run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanStats {
    pub files_read: usize,
    pub rows_read: usize,
    pub rows_sampled: usize,
    pub rows_written: usize,
}

/// `created_utc` appears as an integer, float or string depending on the
/// dump vintage.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Epoch {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Epoch {
    fn as_secs(&self) -> Option<i64> {
        match self {
            Epoch::Int(v) => Some(*v),
            Epoch::Float(v) => Some(*v as i64),
            Epoch::Text(s) => s.trim().parse::<f64>().ok().map(|v| v as i64),
        }
    }
}

/// The raw dump fields the cleaner filters on or carries through.
#[derive(Debug, Clone, Deserialize)]
struct RawSubmission {
    name: Option<String>,
    downs: Option<i64>,
    ups: Option<i64>,
    hide_score: Option<bool>,
    subreddit: Option<String>,
    link_flair_css_class: Option<String>,
    locked: Option<bool>,
    num_comments: Option<i64>,
    id: Option<String>,
    preview: Option<serde_json::Value>,
    link_flair_text: Option<String>,
    score: Option<i64>,
    author: Option<String>,
    author_flair_css_class: Option<String>,
    stickied: Option<bool>,
    title: Option<String>,
    selftext: Option<String>,
    over_18: Option<bool>,
    author_flair_text: Option<String>,
    thumbnail: Option<String>,
    gilded: Option<i64>,
    subreddit_id: Option<String>,
    is_self: Option<bool>,
    created_utc: Option<Epoch>,
}

/// The cleaned record written to the output partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedSubmission {
    pub name: Option<String>,
    pub downs: Option<i64>,
    pub ups: i64,
    pub hide_score: Option<bool>,
    pub subreddit: String,
    pub link_flair_css_class: Option<String>,
    pub locked: Option<bool>,
    pub num_comments: i64,
    pub id: Option<String>,
    pub preview: Option<serde_json::Value>,
    pub link_flair_text: Option<String>,
    pub score: i64,
    pub author: String,
    pub author_flair_css_class: Option<String>,
    pub stickied: Option<bool>,
    pub title: String,
    pub selftext: String,
    pub over_18: bool,
    pub author_flair_text: Option<String>,
    pub thumbnail: Option<String>,
    pub gilded: Option<i64>,
    pub subreddit_id: String,
    pub is_self: bool,
    pub date: String,
    pub datetime: DateTime<Utc>,
    pub word_count_self: usize,
    pub word_count_title: usize,
}

/// Cleaner-grade text validity: meaningful per the analysis predicate and
/// not the bare "." placeholder the dumps are littered with.
fn is_substantive_text(text: &str) -> bool {
    is_meaningful_text(text) && text.trim() != "."
}

/// Validate and project one raw row. `None` means the row is dropped.
fn clean_row(raw: RawSubmission) -> Option<CleanedSubmission> {
    let score = raw.score?;
    let num_comments = raw.num_comments?;
    let ups = raw.ups?;
    let subreddit = raw.subreddit?;
    let author = raw.author?;
    let title = raw.title?;
    let selftext = raw.selftext?;
    let subreddit_id = raw.subreddit_id?;
    let secs = raw.created_utc.as_ref().and_then(Epoch::as_secs)?;

    if raw.over_18? || !raw.is_self? {
        return None;
    }
    if !is_substantive_text(&title) || !is_substantive_text(&selftext) {
        return None;
    }

    let word_count_title = word_count(&title);
    let word_count_self = word_count(&selftext);
    if word_count_title < 1 || word_count_self < 1 {
        return None;
    }

    let datetime = DateTime::<Utc>::from_timestamp(secs, 0)?;

    Some(CleanedSubmission {
        name: raw.name,
        downs: raw.downs,
        ups,
        hide_score: raw.hide_score,
        subreddit,
        link_flair_css_class: raw.link_flair_css_class,
        locked: raw.locked,
        num_comments,
        id: raw.id,
        preview: raw.preview,
        link_flair_text: raw.link_flair_text,
        score,
        author,
        author_flair_css_class: raw.author_flair_css_class,
        stickied: raw.stickied,
        title,
        selftext,
        over_18: false,
        author_flair_text: raw.author_flair_text,
        thumbnail: raw.thumbnail,
        gilded: raw.gilded,
        subreddit_id,
        is_self: true,
        date: datetime.date_naive().to_string(),
        datetime,
        word_count_self,
        word_count_title,
    })
}

fn list_raw_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let name = path.to_string_lossy().to_string();
        if path.is_file() && (name.ends_with(".json") || name.ends_with(".json.gz")) {
            paths.push(path);
        }
    }
    paths.sort();
    if paths.is_empty() {
        return Err(Error::InvalidInput(format!(
            "no .json or .json.gz files found under {}",
            dir.display()
        )));
    }
    Ok(paths)
}

fn open_raw(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if path.to_string_lossy().ends_with(".gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Run the cleaning job over every raw file under `input_dir`, writing one
/// gzip JSON-lines partition under `output_dir`.
#[instrument(skip(options))]
pub fn run(input_dir: &Path, output_dir: &Path, options: &CleanOptions) -> Result<CleanStats> {
    if !(0.0..=1.0).contains(&options.sample_fraction) {
        return Err(Error::InvalidParameter(format!(
            "sample fraction {} must be in [0, 1]",
            options.sample_fraction
        )));
    }

    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let paths = list_raw_files(input_dir)?;
    let mut stats = CleanStats {
        files_read: paths.len(),
        ..CleanStats::default()
    };
    let mut kept: Vec<CleanedSubmission> = Vec::new();

    for path in &paths {
        let reader = BufReader::new(open_raw(path)?);
        let mut file_rows = 0usize;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            stats.rows_read += 1;
            file_rows += 1;

            if !rng.gen_bool(options.sample_fraction) {
                continue;
            }
            stats.rows_sampled += 1;

            let raw: RawSubmission = serde_json::from_str(&line).map_err(|e| Error::Parse {
                path: path.display().to_string(),
                line: idx + 1,
                message: e.to_string(),
            })?;
            if let Some(cleaned) = clean_row(raw) {
                kept.push(cleaned);
                if kept.len() >= options.row_limit {
                    break;
                }
            }
        }
        debug!(path = %path.display(), rows = file_rows, "scanned raw file");
        if kept.len() >= options.row_limit {
            break;
        }
    }

    kept.truncate(options.row_limit);
    stats.rows_written = kept.len();
    write_partition(output_dir, &kept)?;

    info!(
        rows_read = stats.rows_read,
        rows_sampled = stats.rows_sampled,
        rows_written = stats.rows_written,
        "cleaning run complete"
    );
    Ok(stats)
}

fn write_partition(output_dir: &Path, rows: &[CleanedSubmission]) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let file_name = format!("part-00000-{}-c000.json.gz", Uuid::new_v4());
    let file = File::create(output_dir.join(file_name))?;
    let mut enc = GzEncoder::new(file, Compression::default());
    for row in rows {
        let line = serde_json::to_string(row)
            .map_err(|e| Error::Computation(format!("serializing cleaned row: {e}")))?;
        writeln!(enc, "{line}")?;
    }
    enc.finish()?;
    Ok(())
}
