use anyhow::Result;
use clap::Parser;
use snoo_cli::analyses;
use snoo_cli::cli::{Cli, Command};
use snoo_data::clean::{self, CleanOptions};
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout stays a clean report stream.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Command::Comments => analyses::comments::run(&cli.data_dir, &cli.graphs_dir),
        Command::Length => analyses::post_length::run(&cli.data_dir, &cli.graphs_dir),
        Command::Readability => analyses::readability::run(&cli.data_dir, &cli.graphs_dir),
        Command::Sentiment => analyses::sentiment::run(&cli.data_dir, &cli.graphs_dir),
        Command::Popularity => analyses::popularity::run(&cli.data_dir, &cli.graphs_dir),
        Command::ByHour => analyses::by_hour::run(&cli.data_dir, &cli.graphs_dir),
        Command::Clean(args) => {
            let options = CleanOptions {
                sample_fraction: args.sample_fraction,
                row_limit: args.row_limit,
                seed: args.seed,
            };
            let stats = clean::run(&args.input, &args.output, &options)?;
            println!(
                "Cleaned {} of {} sampled rows ({} read) into {}",
                stats.rows_written,
                stats.rows_sampled,
                stats.rows_read,
                args.output.display()
            );
            Ok(())
        }
    }
}
