//! Cell value types for tables.
//!
//! This module defines the [`CellValue`] enum which represents all possible
//! types of values that can be stored in table cells.
//!
//! # Supported Types
//!
//! - **Text** - String data
//! - **Integer** - 64-bit signed integers
//! - **Float** - 64-bit floating-point numbers
//! - **Boolean** - true/false values
//! - **Tokens** - Lists of strings, produced by the pipeline
//! - **Missing** - Absent values
//!
//! # Text Coercion
//!
//! Every cell can be coerced to text with [`CellValue::to_text`], which the
//! pipeline uses to accept arbitrary input columns:
//!
//! ```
//! use lemna::table::CellValue;
//!
//! assert_eq!(CellValue::Integer(42).to_text(), "42");
//! assert_eq!(CellValue::Missing.to_text(), "");
//! ```

use serde::{Deserialize, Serialize};

/// Represents a value stored in a table cell.
///
/// # Examples
///
/// ```
/// use lemna::table::CellValue;
///
/// let text = CellValue::Text("Rust Programming".to_string());
/// let number = CellValue::Integer(2024);
/// let price = CellValue::Float(39.99);
/// let active = CellValue::Boolean(true);
/// let words = CellValue::Tokens(vec!["rust".to_string(), "programming".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// List of token strings
    Tokens(Vec<String>),
    /// Missing value
    Missing,
}

impl CellValue {
    /// Get the value as text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float if this is a numeric value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the value as a boolean if this is a boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a token list if this is a tokens value.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            CellValue::Tokens(tokens) => Some(tokens),
            _ => None,
        }
    }

    /// Check whether this value is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Coerce this value to text.
    ///
    /// The coercion is total: numbers and booleans render with their
    /// canonical string form, token lists join with single spaces, and
    /// missing values become the empty string.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Boolean(b) => b.to_string(),
            CellValue::Tokens(tokens) => tokens.join(" "),
            CellValue::Missing => String::new(),
        }
    }
}
