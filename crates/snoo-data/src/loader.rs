//! Loading gzip-compressed JSON-lines submission files

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use snoo_core::{Error, Result};
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::submission::Submission;

/// Collect every `*.json.gz` under `dir` in sorted path order.
pub fn list_part_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.to_string_lossy().ends_with(".json.gz") {
            paths.push(path);
        }
    }
    paths.sort();
    if paths.is_empty() {
        return Err(Error::InvalidInput(format!(
            "no .json.gz files found under {}",
            dir.display()
        )));
    }
    Ok(paths)
}

/// Load every part file under the data directory into one dataset.
pub fn load_dir(dir: &Path) -> Result<Dataset> {
    load_files(&list_part_files(dir)?)
}

/// Load and concatenate the given part files, preserving order.
pub fn load_files(paths: &[PathBuf]) -> Result<Dataset> {
    let mut rows = Vec::new();
    for path in paths {
        let before = rows.len();
        read_part_file(path, &mut rows)?;
        debug!(
            path = %path.display(),
            rows = rows.len() - before,
            "loaded part file"
        );
    }
    info!(files = paths.len(), rows = rows.len(), "dataset loaded");
    Ok(Dataset::new(rows))
}

fn read_part_file(path: &Path, rows: &mut Vec<Submission>) -> Result<()> {
    let file = File::open(path)?;
    let reader = BufReader::new(GzDecoder::new(file));
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let sub: Submission = serde_json::from_str(&line).map_err(|e| Error::Parse {
            path: path.display().to_string(),
            line: idx + 1,
            message: e.to_string(),
        })?;
        rows.push(sub);
    }
    Ok(())
}
