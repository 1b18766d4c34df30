//! Core types for the metrics report library
//!
//! Errors, the result alias, and the small summary types handed back to the
//! application layer after a table is loaded or a report is generated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// A single plotted point: (x, y) in data coordinates
pub type DataPoint = (f64, f64);

/// Errors that can occur while loading metrics or rendering charts
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to read metrics table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row} has {fields} fields, but the header has {expected}")]
    RaggedRow {
        row: usize,
        fields: usize,
        expected: usize,
    },

    #[error("Metrics table has no header row: {0:?}")]
    MissingHeader(PathBuf),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Invalid value in column '{column}' at row {row}: {value:?}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Failed to render chart '{chart}': {message}")]
    Render { chart: String, message: String },
}

/// Shape summary of a loaded metrics table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    /// Number of data rows (header excluded)
    pub rows: usize,
    /// Number of columns in the header
    pub columns: usize,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} columns", self.rows, self.columns)
    }
}

/// Outcome of a successful report run
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Written chart images, in generation order
    pub outputs: Vec<PathBuf>,
    /// Shape of the table the charts were drawn from
    pub stats: TableStats,
}

impl Report {
    /// The one-line completion message listing every written file name
    pub fn completion_message(&self) -> String {
        let names: Vec<String> = self
            .outputs
            .iter()
            .map(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            })
            .collect();

        format!("Saved {} charts: {}", names.len(), names.join(" / "))
    }
}
