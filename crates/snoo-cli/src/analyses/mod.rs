//! One module per analysis pipeline
//!
//! Each `run` follows the same linear shape: load, filter, derive,
//! split, test, print, plot. Conclusions go to stdout; diagnostics go
//! through `tracing`.

use std::path::Path;

use anyhow::Result;

pub mod by_hour;
pub mod comments;
pub mod popularity;
pub mod post_length;
pub mod readability;
pub mod sentiment;

/// Make sure the graphs directory exists before a chart is written.
pub(crate) fn ensure_graphs_dir(graphs_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(graphs_dir)?;
    Ok(())
}
