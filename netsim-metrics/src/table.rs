//! Metrics table loading
//!
//! Reads a delimited file with a header row into memory. Cells stay as text
//! until a column is requested, so a missing or malformed column only fails
//! when something actually plots it.

use crate::types::{DataPoint, ReportError, Result, TableStats};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// In-memory metrics table, immutable after loading
#[derive(Debug, Clone)]
pub struct MetricsTable {
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl MetricsTable {
    /// Load a metrics table from a file
    ///
    /// Fails if the file is missing, unreadable, has no header row, or has a
    /// row with more fields than the header. Short rows are padded with
    /// missing values.
    pub fn from_path(path: &Path) -> Result<Self> {
        log::info!("Loading metrics table: {:?}", path);

        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_path(path)?;

        let table = Self::from_csv_reader(reader)
            .map_err(|e| match e {
                ReportError::MissingHeader(_) => ReportError::MissingHeader(path.to_path_buf()),
                other => other,
            })?;

        log::info!("Metrics table loaded: {}", table.stats());
        Ok(table)
    }

    /// Load a metrics table from any reader (header row required)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        Self::from_csv_reader(reader)
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(ReportError::MissingHeader(Default::default()));
        }

        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        if let Some((row, record)) = records
            .iter()
            .enumerate()
            .find(|(_, record)| record.len() > headers.len())
        {
            return Err(ReportError::RaggedRow {
                row: row + 1,
                fields: record.len(),
                expected: headers.len(),
            });
        }
        log::debug!("Columns: {:?}", headers);

        Ok(Self { headers, records })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            rows: self.records.len(),
            columns: self.headers.len(),
        }
    }

    /// Parse one column as numbers, in row order
    ///
    /// Empty cells, cells missing from short rows, and the usual missing-value
    /// markers (`NA`, `null`, ...) become `NaN`. Any other text that is not a
    /// number is an `InvalidValue` error carrying the 1-based data row.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| ReportError::MissingColumn(name.to_string()))?;

        self.records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let raw = record.get(index).unwrap_or("");
                parse_cell(raw).ok_or_else(|| ReportError::InvalidValue {
                    column: name.to_string(),
                    row: row + 1,
                    value: raw.to_string(),
                })
            })
            .collect()
    }

    /// Pair two columns row by row
    pub fn series(&self, x_column: &str, y_column: &str) -> Result<Vec<DataPoint>> {
        let xs = self.column(x_column)?;
        let ys = self.column(y_column)?;
        Ok(xs.into_iter().zip(ys).collect())
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        // Duplicate headers resolve to the first occurrence
        self.headers.iter().position(|header| header == name)
    }
}

/// Cell text read as a missing value
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn parse_cell(raw: &str) -> Option<f64> {
    if MISSING_MARKERS.contains(&raw) {
        return Some(f64::NAN);
    }
    raw.parse::<f64>().ok()
}
