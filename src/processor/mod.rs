//! Text processing pipeline.
//!
//! The [`TextProcessor`] runs the three-stage normalization pipeline over
//! one text column of a table:
//!
//! 1. **Clean**: strip symbols, lowercase, trim.
//! 2. **Tokenize**: split the cleaned text on whitespace.
//! 3. **Normalize**: drop stop words and symbol-only tokens, then reduce
//!    the survivors to their dictionary forms with a language model.
//!
//! Each stage's output lands in its own column, so downstream consumers can
//! pick the representation they need.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lemna::model::{Language, SnowballModel};
//! use lemna::processor::TextProcessor;
//! use lemna::table::{CellValue, Table};
//!
//! let model = Arc::new(SnowballModel::new(Language::English));
//! let processor = TextProcessor::new(model);
//!
//! let mut table = Table::builder()
//!     .add_text_column("review", vec!["The Quick-Brown Foxes are running!"])
//!     .build()
//!     .unwrap();
//!
//! processor.process(&mut table, "review").unwrap();
//!
//! assert_eq!(
//!     table.column("clean_text").unwrap().get(0).unwrap().as_text(),
//!     Some("the quick-brown foxes are running")
//! );
//! assert_eq!(
//!     table.column("lemmatized_tokens").unwrap().get(0),
//!     Some(&CellValue::Tokens(vec![
//!         "quick".to_string(),
//!         "brown".to_string(),
//!         "fox".to_string(),
//!         "run".to_string(),
//!     ]))
//! );
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::{AlphanumericCharFilter, CharFilter};
use crate::analysis::token::{IntoTokenStream, Token};
use crate::analysis::token_filter::{AlphanumFilter, Filter, LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::{LemnaError, Result};
use crate::model::LanguageModel;
use crate::table::{CellValue, Table};

pub mod config;

pub use config::ProcessorConfig;

/// Runs the normalization pipeline over table columns.
///
/// The processor is immutable and shareable across threads; `process`
/// takes the table by mutable reference and appends its output columns.
pub struct TextProcessor {
    char_filter: AlphanumericCharFilter,
    tokenizer: WhitespaceTokenizer,
    filters: Vec<Arc<dyn Filter>>,
    model: Arc<dyn LanguageModel>,
    config: ProcessorConfig,
}

impl std::fmt::Debug for TextProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextProcessor")
            .field("model", &self.model.name())
            .field("config", &self.config)
            .finish()
    }
}

impl TextProcessor {
    /// Create a new processor with the default column names.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self::with_config(model, ProcessorConfig::default())
    }

    /// Create a new processor with a custom configuration.
    pub fn with_config(model: Arc<dyn LanguageModel>, config: ProcessorConfig) -> Self {
        let filters: Vec<Arc<dyn Filter>> = vec![
            Arc::new(LowercaseFilter::new()),
            Arc::new(StopFilter::with_stop_words(model.stop_words().clone())),
            Arc::new(AlphanumFilter::new()),
        ];

        TextProcessor {
            char_filter: AlphanumericCharFilter::new(),
            tokenizer: WhitespaceTokenizer::new(),
            filters,
            model,
            config,
        }
    }

    /// Get the language model used by this processor.
    pub fn model(&self) -> &Arc<dyn LanguageModel> {
        &self.model
    }

    /// Get the configuration of this processor.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Clean a raw text: strip symbols, lowercase, trim.
    pub fn clean(&self, text: &str) -> String {
        self.char_filter.filter(text)
    }

    /// Split a cleaned text into whitespace tokens.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(tokens.map(|token| token.text).collect())
    }

    /// Normalize tokens: filter them, then lemmatize the survivors.
    ///
    /// The surviving tokens are joined with spaces and handed to the
    /// language model, which re-segments on word boundaries. Hyphenated
    /// tokens therefore produce one lemma per part, so the output length
    /// can differ from the number of surviving tokens.
    pub fn normalize(&self, tokens: &[String]) -> Result<Vec<String>> {
        let seed: Vec<Token> = tokens
            .iter()
            .enumerate()
            .map(|(position, text)| Token::new(text.clone(), position))
            .collect();

        let mut stream = seed.into_token_stream();
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }

        let surviving: Vec<String> = stream.map(|token| token.text).collect();
        self.model.lemmatize(&surviving.join(" "))
    }

    /// Process one text column of a table.
    ///
    /// The text column is coerced to text in place (missing cells become
    /// empty strings), and three columns are appended: the cleaned text,
    /// the whitespace tokens, and the lemmatized tokens. Every row of the
    /// input table stays in place; no rows are added or removed.
    pub fn process(&self, table: &mut Table, text_column: &str) -> Result<()> {
        let column = table.column(text_column).ok_or_else(|| {
            LemnaError::table(format!("column '{text_column}' not found"))
        })?;

        let texts: Vec<String> = column.cells().iter().map(|cell| cell.to_text()).collect();

        let mut clean_cells = Vec::with_capacity(texts.len());
        let mut token_cells = Vec::with_capacity(texts.len());
        let mut lemma_cells = Vec::with_capacity(texts.len());

        for text in &texts {
            let cleaned = self.clean(text);
            let tokens = self.tokenize(&cleaned)?;
            let lemmas = self.normalize(&tokens)?;

            clean_cells.push(CellValue::Text(cleaned));
            token_cells.push(CellValue::Tokens(tokens));
            lemma_cells.push(CellValue::Tokens(lemmas));
        }

        let coerced = texts.into_iter().map(CellValue::Text).collect();
        table.add_column(text_column, coerced)?;
        table.add_column(self.config.clean_column.clone(), clean_cells)?;
        table.add_column(self.config.tokens_column.clone(), token_cells)?;
        table.add_column(self.config.lemma_column.clone(), lemma_cells)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Language, SnowballModel};

    fn english_processor() -> TextProcessor {
        TextProcessor::new(Arc::new(SnowballModel::new(Language::English)))
    }

    #[test]
    fn test_clean() {
        let processor = english_processor();
        assert_eq!(
            processor.clean("The Quick-Brown Foxes are running!"),
            "the quick-brown foxes are running"
        );
    }

    #[test]
    fn test_tokenize() {
        let processor = english_processor();
        let tokens = processor.tokenize("the quick-brown foxes are running").unwrap();
        assert_eq!(tokens, vec!["the", "quick-brown", "foxes", "are", "running"]);
    }

    #[test]
    fn test_normalize_filters_and_lemmatizes() {
        let processor = english_processor();
        let tokens: Vec<String> = ["the", "quick-brown", "foxes", "are", "running"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let lemmas = processor.normalize(&tokens).unwrap();
        assert_eq!(lemmas, vec!["quick", "brown", "fox", "run"]);
    }

    #[test]
    fn test_normalize_drops_symbol_only_tokens() {
        let processor = english_processor();
        let tokens: Vec<String> = ["-", "--", "fox"].iter().map(|s| s.to_string()).collect();

        let lemmas = processor.normalize(&tokens).unwrap();
        assert_eq!(lemmas, vec!["fox"]);
    }

    #[test]
    fn test_normalize_result_outlives_input_tokens() {
        let processor = english_processor();
        let lemmas = {
            let tokens: Vec<String> = vec!["foxes".to_string(), "running".to_string()];
            processor.normalize(&tokens).unwrap()
        };
        assert_eq!(lemmas, vec!["fox", "run"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        let processor = english_processor();
        assert!(processor.normalize(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_process_appends_columns() {
        let processor = english_processor();
        let mut table = Table::builder()
            .add_text_column("review", vec!["The Quick-Brown Foxes are running!"])
            .build()
            .unwrap();

        processor.process(&mut table, "review").unwrap();

        assert_eq!(
            table.column_names(),
            vec!["review", "clean_text", "tokens", "lemmatized_tokens"]
        );
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.column("tokens").unwrap().get(0),
            Some(&CellValue::Tokens(vec![
                "the".to_string(),
                "quick-brown".to_string(),
                "foxes".to_string(),
                "are".to_string(),
                "running".to_string(),
            ]))
        );
    }

    #[test]
    fn test_process_coerces_non_text_cells() {
        let processor = english_processor();
        let mut table = Table::new();
        table
            .add_column(
                "mixed",
                vec![
                    CellValue::Integer(42),
                    CellValue::Missing,
                    CellValue::Boolean(true),
                ],
            )
            .unwrap();

        processor.process(&mut table, "mixed").unwrap();

        assert_eq!(
            table.column("mixed").unwrap().get(0),
            Some(&CellValue::Text("42".to_string()))
        );
        assert_eq!(
            table.column("mixed").unwrap().get(1),
            Some(&CellValue::Text(String::new()))
        );
        assert_eq!(
            table.column("clean_text").unwrap().get(1),
            Some(&CellValue::Text(String::new()))
        );
        assert_eq!(
            table.column("tokens").unwrap().get(1),
            Some(&CellValue::Tokens(vec![]))
        );
        assert_eq!(
            table.column("clean_text").unwrap().get(2),
            Some(&CellValue::Text("true".to_string()))
        );
    }

    #[test]
    fn test_process_coerces_float_and_token_cells() {
        let processor = english_processor();
        let mut table = Table::new();
        table
            .add_column(
                "mixed",
                vec![
                    CellValue::Float(4.5),
                    CellValue::Tokens(vec!["quick".to_string(), "foxes".to_string()]),
                ],
            )
            .unwrap();

        processor.process(&mut table, "mixed").unwrap();

        assert_eq!(
            table.column("mixed").unwrap().get(0),
            Some(&CellValue::Text("4.5".to_string()))
        );
        // Cleaning strips the decimal point
        assert_eq!(
            table.column("clean_text").unwrap().get(0),
            Some(&CellValue::Text("45".to_string()))
        );
        assert_eq!(
            table.column("mixed").unwrap().get(1),
            Some(&CellValue::Text("quick foxes".to_string()))
        );
        assert_eq!(
            table.column("lemmatized_tokens").unwrap().get(1),
            Some(&CellValue::Tokens(vec![
                "quick".to_string(),
                "fox".to_string(),
            ]))
        );
    }

    #[test]
    fn test_process_twice_replaces_output_columns() {
        let processor = english_processor();
        let mut table = Table::builder()
            .add_text_column("review", vec!["Foxes running"])
            .build()
            .unwrap();

        processor.process(&mut table, "review").unwrap();
        processor.process(&mut table, "review").unwrap();

        assert_eq!(table.column_count(), 4);
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.column("lemmatized_tokens").unwrap().get(0),
            Some(&CellValue::Tokens(vec![
                "fox".to_string(),
                "run".to_string(),
            ]))
        );
    }

    #[test]
    fn test_process_unknown_column() {
        let processor = english_processor();
        let mut table = Table::builder()
            .add_text_column("review", vec!["hello"])
            .build()
            .unwrap();

        let err = processor.process(&mut table, "missing").unwrap_err();
        assert!(err.to_string().contains("'missing' not found"));
        assert_eq!(table.column_count(), 1);
    }

    #[test]
    fn test_process_with_custom_columns() {
        let model = Arc::new(SnowballModel::new(Language::English));
        let config = ProcessorConfig::default()
            .with_clean_column("normalized")
            .with_tokens_column("words")
            .with_lemma_column("lemmas");
        let processor = TextProcessor::with_config(model, config);

        let mut table = Table::builder()
            .add_text_column("review", vec!["Good foxes"])
            .build()
            .unwrap();

        processor.process(&mut table, "review").unwrap();

        assert_eq!(
            table.column_names(),
            vec!["review", "normalized", "words", "lemmas"]
        );
    }

    #[test]
    fn test_process_empty_table() {
        let processor = english_processor();
        let mut table = Table::new();
        table.add_column("review", vec![]).unwrap();

        processor.process(&mut table, "review").unwrap();

        assert_eq!(table.column_count(), 4);
        assert_eq!(table.row_count(), 0);
    }
}
