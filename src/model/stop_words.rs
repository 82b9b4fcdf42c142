//! Built-in stop word lists.
//!
//! One list per supported language, derived from the Snowball project's
//! stop word lists. The lists contain function words (articles, pronouns,
//! prepositions, auxiliaries) that carry no topical signal.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::Language;

/// Default English stop words list.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

/// Default French stop words list.
const FRENCH_STOP_WORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "mes", "moi", "mon", "ne",
    "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui", "sa", "se",
    "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos", "votre",
    "vous", "c", "d", "j", "l", "m", "n", "s", "t", "y", "est", "suis", "es", "sont", "sommes",
    "ai", "as", "avons", "avez", "ont", "sera",
];

/// Default German stop words list.
const GERMAN_STOP_WORDS: &[&str] = &[
    "aber", "alle", "als", "also", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "bist",
    "da", "damit", "dann", "das", "dass", "dein", "deine", "dem", "den", "der", "des", "dich",
    "die", "dies", "diese", "dir", "doch", "dort", "du", "durch", "ein", "eine", "einem",
    "einen", "einer", "eines", "er", "es", "euch", "euer", "eure", "hab", "habe", "haben",
    "hat", "hatte", "hatten", "hier", "ich", "ihr", "ihre", "im", "in", "ist", "ja", "jede",
    "jedem", "jeden", "jeder", "jedes", "kann", "kein", "keine", "man", "mein", "meine", "mich",
    "mir", "mit", "muss", "nach", "nicht", "nichts", "noch", "nun", "nur", "ob", "oder", "ohne",
    "sehr", "sein", "seine", "sich", "sie", "sind", "so", "um", "und", "uns", "unser", "unter",
    "vom", "von", "vor", "war", "waren", "was", "weil", "weiter", "welche", "wenn", "werde",
    "werden", "wie", "wieder", "will", "wir", "wird", "wirst", "wo", "zu", "zum", "zur",
    "zwischen",
];

/// Default Spanish stop words list.
const SPANISH_STOP_WORDS: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos",
    "en", "entre", "era", "eran", "es", "esa", "esas", "ese", "eso", "esos", "esta", "estas",
    "este", "esto", "estos", "fue", "fueron", "ha", "han", "hasta", "hay", "la", "las", "le",
    "les", "lo", "los", "me", "mi", "mis", "mucho", "muchos", "muy", "nada", "ni", "no", "nos",
    "nosotros", "nuestra", "nuestro", "o", "os", "otra", "otras", "otro", "otros", "para",
    "pero", "poco", "por", "porque", "que", "quien", "quienes", "se", "sin", "sobre", "son",
    "soy", "su", "sus", "tanto", "te", "tiene", "tienen", "toda", "todas", "todo", "todos",
    "tu", "tus", "un", "una", "uno", "unos", "y", "ya", "yo",
];

/// Default English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// Default French stop words as a HashSet.
pub static FRENCH_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| FRENCH_STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// Default German stop words as a HashSet.
pub static GERMAN_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| GERMAN_STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// Default Spanish stop words as a HashSet.
pub static SPANISH_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| SPANISH_STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// Get the default stop word set for a language.
pub fn default_stop_words(language: Language) -> &'static HashSet<String> {
    match language {
        Language::English => &ENGLISH_STOP_WORDS_SET,
        Language::French => &FRENCH_STOP_WORDS_SET,
        Language::German => &GERMAN_STOP_WORDS_SET,
        Language::Spanish => &SPANISH_STOP_WORDS_SET,
    }
}
