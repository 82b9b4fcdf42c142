//! Tabular dataset module.
//!
//! This module provides the in-memory table that the pipeline operates on,
//! the cell value types stored in it, and readers and writers for common
//! dataset formats.

pub mod cell;
pub mod convert;
#[allow(clippy::module_inception)]
pub mod table;

// Re-export commonly used types
pub use cell::CellValue;
pub use convert::{CsvTableReader, JsonlTableReader, JsonlTableWriter};
pub use table::{Column, Table, TableBuilder};
