//! JSONL table reader and writer.
//!
//! Each line is a single JSON object; one object per row:
//! ```jsonl
//! {"id": 1, "review": "Great product", "rating": 5}
//! {"id": 2, "review": "Broke after a week", "rating": 1}
//! ```
//!
//! Rows may carry different keys. Columns appear in the order their keys
//! are first seen, and rows missing a key get a missing cell.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::{LemnaError, Result};
use crate::table::cell::CellValue;
use crate::table::table::Table;

/// A table reader for JSONL format.
///
/// JSON types map directly onto cell types: strings stay text (no numeric
/// re-inference), numbers become integers or floats, `null` becomes a
/// missing cell, and arrays of strings become token lists. Nested objects
/// and mixed arrays are rejected.
#[derive(Debug, Clone, Default)]
pub struct JsonlTableReader;

impl JsonlTableReader {
    /// Create a new JSONL reader.
    pub fn new() -> Self {
        JsonlTableReader
    }

    /// Read a table from a file.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let file = File::open(path)?;
        self.read_from(file)
    }

    /// Read a table from any reader.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Table> {
        let mut column_order: Vec<String> = Vec::new();
        let mut columns: Vec<Vec<CellValue>> = Vec::new();
        let mut row_count = 0;

        for (line_index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let line_number = line_index + 1;
            let value: Value = serde_json::from_str(line).map_err(|e| {
                LemnaError::parse(format!("line {line_number}: invalid JSON: {e}"))
            })?;

            let Value::Object(object) = value else {
                return Err(LemnaError::parse(format!(
                    "line {line_number}: expected a JSON object"
                )));
            };

            for (key, value) in &object {
                let cell = Self::cell_from_value(value, line_number)?;
                match column_order.iter().position(|name| name == key) {
                    Some(index) => columns[index].push(cell),
                    None => {
                        let mut cells = vec![CellValue::Missing; row_count];
                        cells.push(cell);
                        column_order.push(key.clone());
                        columns.push(cells);
                    }
                }
            }

            row_count += 1;
            for cells in &mut columns {
                if cells.len() < row_count {
                    cells.push(CellValue::Missing);
                }
            }
        }

        let mut table = Table::new();
        for (name, cells) in column_order.into_iter().zip(columns) {
            table.add_column(name, cells)?;
        }

        Ok(table)
    }

    /// Convert a JSON value to a cell value.
    fn cell_from_value(value: &Value, line_number: usize) -> Result<CellValue> {
        match value {
            Value::Null => Ok(CellValue::Missing),
            Value::Bool(b) => Ok(CellValue::Boolean(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(CellValue::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(CellValue::Float(f))
                } else {
                    Ok(CellValue::Text(n.to_string()))
                }
            }
            Value::String(s) => Ok(CellValue::Text(s.clone())),
            Value::Array(items) => {
                let mut tokens = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => tokens.push(s.clone()),
                        _ => {
                            return Err(LemnaError::parse(format!(
                                "line {line_number}: arrays may only contain strings"
                            )));
                        }
                    }
                }
                Ok(CellValue::Tokens(tokens))
            }
            Value::Object(_) => Err(LemnaError::parse(format!(
                "line {line_number}: nested objects are not supported"
            ))),
        }
    }
}

/// A table writer for JSONL format.
///
/// Writes one JSON object per row with keys in column order. Missing cells
/// are written as `null`.
#[derive(Debug, Clone, Default)]
pub struct JsonlTableWriter;

impl JsonlTableWriter {
    /// Create a new JSONL writer.
    pub fn new() -> Self {
        JsonlTableWriter
    }

    /// Write a table to a file.
    pub fn write<P: AsRef<Path>>(&self, table: &Table, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(table, BufWriter::new(file))
    }

    /// Write a table to any writer.
    pub fn write_to<W: Write>(&self, table: &Table, mut writer: W) -> Result<()> {
        for index in 0..table.row_count() {
            let mut object = serde_json::Map::new();
            for column in table.columns() {
                object.insert(
                    column.name().to_string(),
                    Self::value_from_cell(&column.cells()[index]),
                );
            }
            serde_json::to_writer(&mut writer, &Value::Object(object))?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Convert a cell value to a JSON value.
    fn value_from_cell(cell: &CellValue) -> Value {
        match cell {
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::Integer(i) => Value::from(*i),
            CellValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CellValue::Boolean(b) => Value::Bool(*b),
            CellValue::Tokens(tokens) => {
                Value::Array(tokens.iter().map(|t| Value::String(t.clone())).collect())
            }
            CellValue::Missing => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsonl_parsing() {
        let reader = JsonlTableReader::new();
        let input = "{\"title\": \"Test\", \"year\": 2024}\n{\"title\": \"Other\", \"year\": 2023}\n";
        let table = reader.read_from(input.as_bytes()).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_names(), vec!["title", "year"]);
        assert_eq!(
            table.column("title").unwrap().get(0).unwrap().as_text(),
            Some("Test")
        );
        assert_eq!(
            table.column("year").unwrap().get(1),
            Some(&CellValue::Integer(2023))
        );
    }

    #[test]
    fn test_jsonl_strings_stay_text() {
        let reader = JsonlTableReader::new();
        let input = "{\"code\": \"42\"}\n";
        let table = reader.read_from(input.as_bytes()).unwrap();

        assert_eq!(
            table.column("code").unwrap().get(0),
            Some(&CellValue::Text("42".to_string()))
        );
    }

    #[test]
    fn test_jsonl_null_and_absent_become_missing() {
        let reader = JsonlTableReader::new();
        let input = "{\"a\": null, \"b\": 1}\n{\"b\": 2, \"c\": \"late\"}\n";
        let table = reader.read_from(input.as_bytes()).unwrap();

        assert_eq!(table.column_names(), vec!["a", "b", "c"]);
        assert_eq!(table.column("a").unwrap().get(0), Some(&CellValue::Missing));
        assert_eq!(table.column("a").unwrap().get(1), Some(&CellValue::Missing));
        assert_eq!(table.column("c").unwrap().get(0), Some(&CellValue::Missing));
        assert_eq!(
            table.column("c").unwrap().get(1),
            Some(&CellValue::Text("late".to_string()))
        );
    }

    #[test]
    fn test_jsonl_string_arrays_become_tokens() {
        let reader = JsonlTableReader::new();
        let input = "{\"tokens\": [\"quick\", \"brown\"]}\n";
        let table = reader.read_from(input.as_bytes()).unwrap();

        assert_eq!(
            table.column("tokens").unwrap().get(0),
            Some(&CellValue::Tokens(vec![
                "quick".to_string(),
                "brown".to_string()
            ]))
        );
    }

    #[test]
    fn test_jsonl_rejects_nested_objects() {
        let reader = JsonlTableReader::new();
        let input = "{\"ok\": 1}\n{\"nested\": {\"a\": 1}}\n";
        let err = reader.read_from(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_jsonl_rejects_mixed_arrays() {
        let reader = JsonlTableReader::new();
        let input = "{\"tokens\": [\"a\", 1]}\n";
        assert!(reader.read_from(input.as_bytes()).is_err());
    }

    #[test]
    fn test_jsonl_skips_empty_lines() {
        let reader = JsonlTableReader::new();
        let input = "{\"a\": 1}\n\n{\"a\": 2}\n";
        let table = reader.read_from(input.as_bytes()).unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_jsonl_writer_output() {
        let table = Table::builder()
            .add_text_column("review", vec!["Great product"])
            .add_column(
                "tokens",
                vec![CellValue::Tokens(vec![
                    "great".to_string(),
                    "product".to_string(),
                ])],
            )
            .add_column("note", vec![CellValue::Missing])
            .build()
            .unwrap();

        let mut output = Vec::new();
        JsonlTableWriter::new().write_to(&table, &mut output).unwrap();

        let written = String::from_utf8(output).unwrap();
        assert_eq!(
            written,
            "{\"review\":\"Great product\",\"tokens\":[\"great\",\"product\"],\"note\":null}\n"
        );
    }

    #[test]
    fn test_jsonl_write_read_roundtrip() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.jsonl");

        let table = Table::builder()
            .add_text_column("text", vec!["hello", "world"])
            .add_integer_column("id", vec![1, 2])
            .build()
            .unwrap();

        JsonlTableWriter::new().write(&table, &path).unwrap();
        let read_back = JsonlTableReader::new().read(&path).unwrap();

        assert_eq!(read_back, table);
    }
}
