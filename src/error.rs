//! Error types for the Lemna library.
//!
//! All fallible operations in Lemna return [`Result`], whose error type is
//! the [`LemnaError`] enum. The enum is built with `thiserror` and carries
//! one variant per subsystem, plus `#[from]` conversions for the error
//! types of the crates Lemna reads data through.
//!
//! # Examples
//!
//! ```
//! use lemna::error::{LemnaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LemnaError::model("unsupported language: klingon"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Lemna operations.
#[derive(Error, Debug)]
pub enum LemnaError {
    /// I/O errors (stopword files, table files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Language-model capability errors (loading, lemmatization)
    #[error("Model error: {0}")]
    Model(String),

    /// Table-related errors (missing columns, length mismatches)
    #[error("Table error: {0}")]
    Table(String),

    /// Input parsing errors (CSV/JSONL conversion)
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LemnaError.
pub type Result<T> = std::result::Result<T, LemnaError>;

impl LemnaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LemnaError::Analysis(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        LemnaError::Model(msg.into())
    }

    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        LemnaError::Table(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LemnaError::Parse(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LemnaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LemnaError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = LemnaError::model("Test model error");
        assert_eq!(error.to_string(), "Model error: Test model error");

        let error = LemnaError::table("Test table error");
        assert_eq!(error.to_string(), "Table error: Test table error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lemna_error = LemnaError::from(io_error);

        match lemna_error {
            LemnaError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
