//! Char filter implementations for text cleaning.
//!
//! Char filters pre-process a text string before it reaches the tokenizer.
//! In this pipeline the char filter stage is itself a first-class output:
//! the cleaned string is written to the dataset as its own column, and all
//! later stages operate on it rather than on the raw cell value.
//!
//! # Available Filters
//!
//! - [`alphanumeric::AlphanumericCharFilter`] - Strips symbols, lowercases, trims

/// Trait for character filters that transform text before tokenization.
///
/// Implementations must be pure: the same input always yields the same
/// output, with no side effects.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;

pub use alphanumeric::AlphanumericCharFilter;
