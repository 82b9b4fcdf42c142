//! CSV table reader.
//!
//! Reads CSV data into a table where the first row contains column names:
//! ```csv
//! id,review,rating
//! 1,Great product,5
//! 2,"Broke after a week, disappointed",1
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{LemnaError, Result};
use crate::table::cell::CellValue;
use crate::table::table::Table;

/// A table reader for CSV format.
///
/// The first row is treated as the header containing column names. Cell
/// types are inferred per value:
///
/// - `true` / `false` (case-insensitive) become booleans
/// - values parseable as `i64` become integers
/// - values parseable as `f64` become floats
/// - empty values become missing cells
/// - everything else stays text
pub struct CsvTableReader {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
    /// Whether to allow rows with differing field counts
    flexible: bool,
}

impl std::fmt::Debug for CsvTableReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvTableReader")
            .field("delimiter", &(self.delimiter as char))
            .field("flexible", &self.flexible)
            .finish()
    }
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvTableReader {
    /// Create a new CSV reader with comma delimiter.
    pub fn new() -> Self {
        CsvTableReader {
            delimiter: b',',
            flexible: false,
        }
    }

    /// Set a custom delimiter character.
    ///
    /// The `csv` crate works on raw bytes, so the delimiter must be a
    /// single ASCII character.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(LemnaError::parse(format!(
                "delimiter '{delimiter}' is not an ASCII character"
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// Set whether to allow rows with differing field counts.
    ///
    /// When enabled, short rows are padded with missing cells and extra
    /// fields are dropped.
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    /// Read a table from a file.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let file = File::open(path)?;
        self.read_from(file)
    }

    /// Read a table from any reader.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Table> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .flexible(self.flexible)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(LemnaError::parse("CSV header is empty"));
        }

        let mut columns: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];

        for record in csv_reader.records() {
            let record = record?;
            for (index, column) in columns.iter_mut().enumerate() {
                let cell = match record.get(index) {
                    Some(value) => Self::infer_cell_value(value),
                    None => CellValue::Missing,
                };
                column.push(cell);
            }
        }

        let mut table = Table::new();
        for (header, cells) in headers.iter().zip(columns) {
            table.add_column(header, cells)?;
        }

        Ok(table)
    }

    /// Infer the cell value type from a string.
    fn infer_cell_value(value: &str) -> CellValue {
        if value.is_empty() {
            return CellValue::Missing;
        }

        // Try boolean
        if value.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if value.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        // Try integer
        if let Ok(int_val) = value.parse::<i64>() {
            return CellValue::Integer(int_val);
        }

        // Try float
        if let Ok(float_val) = value.parse::<f64>() {
            return CellValue::Float(float_val);
        }

        // Default to text
        CellValue::Text(value.to_string())
    }
}
