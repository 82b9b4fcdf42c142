//! Column-major table structure.

use serde::{Deserialize, Serialize};

use crate::error::{LemnaError, Result};
use crate::table::cell::CellValue;

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    cells: Vec<CellValue>,
}

impl Column {
    /// Create a new column.
    pub fn new<S: Into<String>>(name: S, cells: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            cells,
        }
    }

    /// Get the name of this column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the cells of this column.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Get the cell at the given row index.
    pub fn get(&self, row: usize) -> Option<&CellValue> {
        self.cells.get(row)
    }

    /// Get the number of cells in this column.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if this column has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An in-memory table with named columns.
///
/// Columns are stored in insertion order and every column holds exactly
/// one cell per row. The table is the unit the pipeline operates on:
/// processing reads one text column and appends derived columns.
///
/// # Examples
///
/// ```
/// use lemna::table::{CellValue, Table};
///
/// let mut table = Table::new();
/// table
///     .add_column("id", vec![CellValue::Integer(1), CellValue::Integer(2)])
///     .unwrap();
/// table
///     .add_column(
///         "text",
///         vec![
///             CellValue::Text("first row".to_string()),
///             CellValue::Text("second row".to_string()),
///         ],
///     )
///     .unwrap();
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.column_names(), vec!["id", "text"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Table {
            columns: Vec::new(),
        }
    }

    /// Add a column, or replace an existing column with the same name.
    ///
    /// A replacement keeps the column's position. The cell count must match
    /// the table's row count unless the table has no columns yet.
    pub fn add_column<S: Into<String>>(&mut self, name: S, cells: Vec<CellValue>) -> Result<()> {
        let name = name.into();

        if !self.columns.is_empty() && cells.len() != self.row_count() {
            return Err(LemnaError::table(format!(
                "column '{}' has {} cells but the table has {} rows",
                name,
                cells.len(),
                self.row_count()
            )));
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.cells = cells,
            None => self.columns.push(Column::new(name, cells)),
        }

        Ok(())
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check if the table has a column with the given name.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Get all column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get all columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the cells of one row as `(column name, cell)` pairs.
    pub fn row(&self, index: usize) -> Option<Vec<(&str, &CellValue)>> {
        if index >= self.row_count() {
            return None;
        }

        Some(
            self.columns
                .iter()
                .map(|c| (c.name.as_str(), &c.cells[index]))
                .collect(),
        )
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Create a builder for constructing tables.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }
}

/// A builder for constructing tables in a fluent manner.
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Vec<Column>,
}

impl TableBuilder {
    /// Create a new table builder.
    pub fn new() -> Self {
        TableBuilder {
            columns: Vec::new(),
        }
    }

    /// Add a text column to the table.
    pub fn add_text_column<S, I, T>(mut self, name: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let cells = values
            .into_iter()
            .map(|v| CellValue::Text(v.into()))
            .collect();
        self.columns.push(Column::new(name, cells));
        self
    }

    /// Add an integer column to the table.
    pub fn add_integer_column<S: Into<String>>(mut self, name: S, values: Vec<i64>) -> Self {
        let cells = values.into_iter().map(CellValue::Integer).collect();
        self.columns.push(Column::new(name, cells));
        self
    }

    /// Add a float column to the table.
    pub fn add_float_column<S: Into<String>>(mut self, name: S, values: Vec<f64>) -> Self {
        let cells = values.into_iter().map(CellValue::Float).collect();
        self.columns.push(Column::new(name, cells));
        self
    }

    /// Add a boolean column to the table.
    pub fn add_boolean_column<S: Into<String>>(mut self, name: S, values: Vec<bool>) -> Self {
        let cells = values.into_iter().map(CellValue::Boolean).collect();
        self.columns.push(Column::new(name, cells));
        self
    }

    /// Add a column with generic cell values.
    pub fn add_column<S: Into<String>>(mut self, name: S, cells: Vec<CellValue>) -> Self {
        self.columns.push(Column::new(name, cells));
        self
    }

    /// Build the final table.
    ///
    /// Fails when the columns have differing cell counts or a column name
    /// appears more than once.
    pub fn build(self) -> Result<Table> {
        let mut table = Table::new();

        for column in self.columns {
            if table.has_column(column.name()) {
                return Err(LemnaError::table(format!(
                    "duplicate column '{}'",
                    column.name()
                )));
            }
            table.add_column(column.name, column.cells)?;
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_add_column() {
        let mut table = Table::new();
        table
            .add_column("id", vec![CellValue::Integer(1), CellValue::Integer(2)])
            .unwrap();

        assert_eq!(table.row_count(), 2);
        assert!(table.has_column("id"));
        assert_eq!(table.column("id").unwrap().get(0), Some(&CellValue::Integer(1)));
    }

    #[test]
    fn test_add_column_length_mismatch() {
        let mut table = Table::new();
        table
            .add_column("id", vec![CellValue::Integer(1), CellValue::Integer(2)])
            .unwrap();

        let err = table
            .add_column("extra", vec![CellValue::Integer(1)])
            .unwrap_err();
        assert!(err.to_string().contains("2 rows"));
    }

    #[test]
    fn test_replace_column_keeps_position() {
        let mut table = Table::builder()
            .add_text_column("a", vec!["x"])
            .add_text_column("b", vec!["y"])
            .build()
            .unwrap();

        table
            .add_column("a", vec![CellValue::Text("z".to_string())])
            .unwrap();

        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.column("a").unwrap().get(0).unwrap().to_text(), "z");
    }

    #[test]
    fn test_row_access() {
        let table = Table::builder()
            .add_text_column("text", vec!["hello"])
            .add_integer_column("id", vec![7])
            .build()
            .unwrap();

        let row = table.row(0).unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].0, "text");
        assert_eq!(row[1].1, &CellValue::Integer(7));
        assert!(table.row(1).is_none());
    }

    #[test]
    fn test_builder_rejects_mismatched_lengths() {
        let result = Table::builder()
            .add_text_column("a", vec!["x", "y"])
            .add_integer_column("b", vec![1])
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_duplicate_names() {
        let result = Table::builder()
            .add_text_column("a", vec!["x"])
            .add_text_column("a", vec!["y"])
            .build();

        assert!(result.is_err());
    }
}
