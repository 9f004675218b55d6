//! Export helpers for session results: JSON documents, CSV time series, plain-text
//! summaries, and PNG charts.

pub mod csv;
pub mod json;
pub mod plot;
pub mod report;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors surfaced by the exporters.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialise JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("failed to render plot: {0}")]
    Plot(String),
    #[error("cannot export an empty time series")]
    EmptySeries,
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    create_parent_dir(path)?;
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub(crate) fn create_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
