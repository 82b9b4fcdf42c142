//! Language model abstractions.
//!
//! A language model supplies the language-dependent pieces of the pipeline:
//! the stop word vocabulary and the lemmatizer. The normalization stage is
//! written against the [`LanguageModel`] trait so that models can be swapped
//! without touching the pipeline itself.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LemnaError, Result};

pub mod snowball;
pub mod stop_words;

pub use snowball::SnowballModel;

/// Trait for language models used by the normalization stage.
pub trait LanguageModel: Send + Sync {
    /// Get the stop words of this model's language.
    fn stop_words(&self) -> &HashSet<String>;

    /// Reduce each word of `text` to its dictionary form.
    ///
    /// The text is segmented into words internally, so hyphenated input
    /// like `"quick-brown"` yields two lemmas. Non-word segments such as
    /// punctuation and whitespace produce no lemmas.
    fn lemmatize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this model (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// Languages with built-in model support.
///
/// Parsing is case-insensitive and accepts both full names and ISO 639
/// codes, so `"English"`, `"english"`, and `"en"` all resolve to
/// [`Language::English`]. Unsupported names are rejected up front, before
/// any data is read.
///
/// # Examples
///
/// ```
/// use lemna::model::Language;
///
/// let language: Language = "en".parse().unwrap();
/// assert_eq!(language, Language::English);
/// assert!("klingon".parse::<Language>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    English,
    /// French
    French,
    /// German
    German,
    /// Spanish
    Spanish,
}

impl Language {
    /// All supported languages.
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::French,
            Language::German,
            Language::Spanish,
        ]
    }

    /// Get the lowercase English name of this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Spanish => "spanish",
        }
    }

    /// Get the ISO 639-1 code of this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = LemnaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "fr" | "fra" | "french" => Ok(Language::French),
            "de" | "deu" | "german" => Ok(Language::German),
            "es" | "spa" | "spanish" => Ok(Language::Spanish),
            _ => Err(LemnaError::model(format!(
                "unsupported language '{s}' (supported: english, french, german, spanish)"
            ))),
        }
    }
}
