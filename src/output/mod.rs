//! Output module for exporting scraped records
//!
//! This module handles:
//! - Writing a finished result set as CSV or pretty-printed JSON
//! - Formatting the console preview shown when no export is requested

mod csv_output;
mod json_output;
mod preview;

pub use csv_output::write_csv;
pub use json_output::write_json;
pub use preview::{format_preview, print_preview, PREVIEW_LIMIT};

use crate::record::ResultSet;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One header row plus one row per record
    Csv,
    /// A pretty-printed array of record objects
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Writes `results` to `path` in the given format
///
/// An empty result set writes nothing and leaves any existing file alone.
///
/// # Returns
///
/// * `Ok(usize)` - Number of records written
/// * `Err(OutputError)` - The file could not be created or written
pub fn export(results: &ResultSet, format: ExportFormat, path: &Path) -> OutputResult<usize> {
    if results.is_empty() {
        tracing::warn!("No data to export");
        return Ok(0);
    }

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => write_csv(results, &mut writer)?,
        ExportFormat::Json => write_json(results, &mut writer)?,
    }
    writer.flush()?;

    tracing::debug!(
        "Wrote {} products to {} ({})",
        results.len(),
        path.display(),
        format
    );
    Ok(results.len())
}
