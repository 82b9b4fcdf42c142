//! Table readers and writers for dataset formats.
//!
//! Readers materialize a whole dataset into a [`Table`](crate::table::Table);
//! the pipeline operates in memory, not on streams.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LemnaError, Result};

pub mod csv;
pub mod jsonl;

pub use csv::CsvTableReader;
pub use jsonl::{JsonlTableReader, JsonlTableWriter};

/// Supported dataset file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// One JSON object per line.
    Jsonl,
}

impl TableFormat {
    /// Infer the format from a file extension.
    ///
    /// Recognizes `csv`, `tsv`, `jsonl`, and `ndjson` (case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<TableFormat> {
        let extension = path.as_ref().extension()?.to_str()?;
        match extension.to_lowercase().as_str() {
            "csv" | "tsv" => Some(TableFormat::Csv),
            "jsonl" | "ndjson" => Some(TableFormat::Jsonl),
            _ => None,
        }
    }
}

impl FromStr for TableFormat {
    type Err = LemnaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "jsonl" | "ndjson" => Ok(TableFormat::Jsonl),
            _ => Err(LemnaError::parse(format!(
                "unsupported format '{s}' (supported: csv, jsonl)"
            ))),
        }
    }
}
