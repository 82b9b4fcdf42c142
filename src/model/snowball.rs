//! Snowball-backed language model implementation.
//!
//! Lemmatization is a two-step lookup: irregular forms are resolved through
//! a fixed table, everything else is reduced with the Snowball stemmer for
//! the model's language. Words are segmented with the Unicode word boundary
//! rules (UAX #29), so hyphenated input splits into its parts.
//!
//! # Examples
//!
//! ```
//! use lemna::model::{Language, LanguageModel, SnowballModel};
//!
//! let model = SnowballModel::new(Language::English);
//! let lemmas = model.lemmatize("quick-brown foxes running").unwrap();
//! assert_eq!(lemmas, vec!["quick", "brown", "fox", "run"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

use super::{Language, LanguageModel, stop_words};
use crate::error::Result;

/// Irregular English forms that stemming alone does not resolve.
///
/// Maps inflected forms to their dictionary form. Ambiguous words whose
/// lemma depends on part of speech (such as "lives" or "leaves") are left
/// out and fall through to the stemmer.
const ENGLISH_IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("said", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("thought", "think"),
    ("told", "tell"),
    ("became", "become"),
    ("left", "leave"),
    ("felt", "feel"),
    ("brought", "bring"),
    ("began", "begin"),
    ("begun", "begin"),
    ("kept", "keep"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("met", "meet"),
    ("ran", "run"),
    ("paid", "pay"),
    ("sat", "sit"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("led", "lead"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("lost", "lose"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("sent", "send"),
    ("built", "build"),
    ("understood", "understand"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("broke", "break"),
    ("broken", "break"),
    ("spent", "spend"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("bought", "buy"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("taught", "teach"),
    ("caught", "catch"),
    ("fought", "fight"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("sold", "sell"),
    ("sought", "seek"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("farther", "far"),
    ("furthest", "far"),
];

/// English irregular forms as a lookup table.
static ENGLISH_IRREGULAR_FORMS_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ENGLISH_IRREGULAR_FORMS.iter().copied().collect());

/// Empty table for languages without irregular form data.
static NO_IRREGULAR_FORMS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(HashMap::new);

fn algorithm_for(language: Language) -> Algorithm {
    match language {
        Language::English => Algorithm::English,
        Language::French => Algorithm::French,
        Language::German => Algorithm::German,
        Language::Spanish => Algorithm::Spanish,
    }
}

fn irregular_forms_for(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::English => &ENGLISH_IRREGULAR_FORMS_MAP,
        _ => &NO_IRREGULAR_FORMS,
    }
}

/// A language model backed by a Snowball stemmer.
///
/// The model carries the default stop word list for its language; extra
/// words can be added per instance without affecting other models.
pub struct SnowballModel {
    language: Language,
    stemmer: Stemmer,
    irregular_forms: &'static HashMap<&'static str, &'static str>,
    stop_words: HashSet<String>,
}

impl SnowballModel {
    /// Create a new model for the given language with its default stop words.
    pub fn new(language: Language) -> Self {
        SnowballModel {
            language,
            stemmer: Stemmer::create(algorithm_for(language)),
            irregular_forms: irregular_forms_for(language),
            stop_words: stop_words::default_stop_words(language).clone(),
        }
    }

    /// Add extra stop words to this model.
    ///
    /// Words are lowercased before insertion so that lookup against
    /// lowercased tokens stays exact.
    ///
    /// # Examples
    ///
    /// ```
    /// use lemna::model::{Language, LanguageModel, SnowballModel};
    ///
    /// let model = SnowballModel::new(Language::English)
    ///     .with_extra_stop_words(vec!["foo", "Bar"]);
    /// assert!(model.stop_words().contains("foo"));
    /// assert!(model.stop_words().contains("bar"));
    /// ```
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.into().to_lowercase()));
        self
    }

    /// Add stop words from a file, one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Words are
    /// lowercased before insertion.
    pub fn add_stop_words_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        for line in contents.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            self.stop_words.insert(word.to_lowercase());
        }
        Ok(self)
    }

    /// Get the language of this model.
    pub fn language(&self) -> Language {
        self.language
    }
}

impl LanguageModel for SnowballModel {
    fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    fn lemmatize(&self, text: &str) -> Result<Vec<String>> {
        let lemmas = text
            .unicode_words()
            .map(|word| {
                let word = word.to_lowercase();
                if let Some(&lemma) = self.irregular_forms.get(word.as_str()) {
                    lemma.to_string()
                } else {
                    self.stemmer.stem(&word).into_owned()
                }
            })
            .collect();

        Ok(lemmas)
    }

    fn name(&self) -> &'static str {
        match self.language {
            Language::English => "snowball-english",
            Language::French => "snowball-french",
            Language::German => "snowball-german",
            Language::Spanish => "snowball-spanish",
        }
    }
}

impl fmt::Debug for SnowballModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballModel")
            .field("language", &self.language)
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemmatize_regular_forms() {
        let model = SnowballModel::new(Language::English);
        let lemmas = model.lemmatize("foxes running jumped").unwrap();
        assert_eq!(lemmas, vec!["fox", "run", "jump"]);
    }

    #[test]
    fn test_lemmatize_irregular_forms() {
        let model = SnowballModel::new(Language::English);
        let lemmas = model.lemmatize("went children better").unwrap();
        assert_eq!(lemmas, vec!["go", "child", "good"]);
    }

    #[test]
    fn test_lemmatize_splits_hyphenated_words() {
        let model = SnowballModel::new(Language::English);
        let lemmas = model.lemmatize("quick-brown foxes").unwrap();
        assert_eq!(lemmas, vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn test_lemmatize_keeps_numbers() {
        let model = SnowballModel::new(Language::English);
        let lemmas = model.lemmatize("42 degrees").unwrap();
        assert_eq!(lemmas, vec!["42", "degre"]);
    }

    #[test]
    fn test_lemmatize_empty_text() {
        let model = SnowballModel::new(Language::English);
        assert!(model.lemmatize("").unwrap().is_empty());
    }

    #[test]
    fn test_default_stop_words_loaded() {
        let model = SnowballModel::new(Language::English);
        assert!(model.stop_words().contains("the"));
        assert!(model.stop_words().contains("are"));
    }

    #[test]
    fn test_extra_stop_words() {
        let model =
            SnowballModel::new(Language::English).with_extra_stop_words(vec!["Widget", "acme"]);
        assert!(model.stop_words().contains("widget"));
        assert!(model.stop_words().contains("acme"));
        assert!(model.stop_words().contains("the"));
    }

    #[test]
    fn test_stop_words_from_file() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stop_words.txt");
        std::fs::write(&path, "# domain words\nwidget\n\nAcme\n").unwrap();

        let model = SnowballModel::new(Language::English)
            .add_stop_words_from_file(&path)
            .unwrap();

        assert!(model.stop_words().contains("widget"));
        assert!(model.stop_words().contains("acme"));
        assert!(!model.stop_words().contains("# domain words"));
    }

    #[test]
    fn test_french_model_stems_french() {
        let model = SnowballModel::new(Language::French);
        let lemmas = model.lemmatize("maisons").unwrap();
        assert_eq!(lemmas, vec!["maison"]);
    }

    #[test]
    fn test_model_names() {
        assert_eq!(
            SnowballModel::new(Language::English).name(),
            "snowball-english"
        );
        assert_eq!(
            SnowballModel::new(Language::German).name(),
            "snowball-german"
        );
    }
}
