//! Configuration for the text processor.

use serde::{Deserialize, Serialize};

/// Names of the columns the processor appends.
///
/// Any configured name that already exists in the table is overwritten
/// in place.
///
/// # Examples
///
/// ```
/// use lemna::processor::ProcessorConfig;
///
/// let config = ProcessorConfig::default()
///     .with_clean_column("normalized")
///     .with_lemma_column("lemmas");
///
/// assert_eq!(config.clean_column, "normalized");
/// assert_eq!(config.tokens_column, "tokens");
/// assert_eq!(config.lemma_column, "lemmas");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Column receiving the cleaned text.
    pub clean_column: String,
    /// Column receiving the whitespace tokens.
    pub tokens_column: String,
    /// Column receiving the lemmatized tokens.
    pub lemma_column: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            clean_column: "clean_text".to_string(),
            tokens_column: "tokens".to_string(),
            lemma_column: "lemmatized_tokens".to_string(),
        }
    }
}

impl ProcessorConfig {
    /// Create a configuration with the default column names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the cleaned text column.
    pub fn with_clean_column<S: Into<String>>(mut self, name: S) -> Self {
        self.clean_column = name.into();
        self
    }

    /// Set the name of the tokens column.
    pub fn with_tokens_column<S: Into<String>>(mut self, name: S) -> Self {
        self.tokens_column = name.into();
        self
    }

    /// Set the name of the lemmatized tokens column.
    pub fn with_lemma_column<S: Into<String>>(mut self, name: S) -> Self {
        self.lemma_column = name.into();
        self
    }
}
