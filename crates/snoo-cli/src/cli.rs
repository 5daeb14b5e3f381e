//! Command-line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "snoo")]
#[command(version)]
#[command(about = "Exploratory analysis of cleaned Reddit submissions", long_about = None)]
pub struct Cli {
    /// Directory holding the cleaned .json.gz part files
    #[arg(long = "data-dir", value_name = "DIR", default_value = "Cleaned Data")]
    pub data_dir: PathBuf,

    /// Directory chart images are written to
    #[arg(long = "graphs-dir", value_name = "DIR", default_value = "Graphs")]
    pub graphs_dir: PathBuf,

    /// Verbose diagnostic logging
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Does comment volume move submission scores?
    Comments,
    /// Does selftext length move submission scores?
    Length,
    /// Do readability and grade level move submission scores?
    Readability,
    /// Is sentiment associated with the score band?
    Sentiment,
    /// Does subreddit popularity move submission scores?
    Popularity,
    /// Does posting hour trend with the average score?
    ByHour,
    /// Clean and sample raw Reddit dumps into analysis-ready part files
    Clean(CleanArgs),
}

#[derive(Args)]
pub struct CleanArgs {
    /// Directory of raw dump files (.json or .json.gz)
    pub input: PathBuf,

    /// Output directory for the cleaned partition
    pub output: PathBuf,

    /// Bernoulli sampling fraction applied to the raw rows
    #[arg(long, value_name = "FRACTION", default_value_t = 0.3)]
    pub sample_fraction: f64,

    /// Maximum rows written per invocation
    #[arg(long, value_name = "ROWS", default_value_t = 25_000)]
    pub row_limit: usize,

    /// Seed for the sampler; omit for a fresh sample each run
    #[arg(long)]
    pub seed: Option<u64>,
}
