//! Text normalization, tokenization, stopword filtering, and noun
//! lemmatization for the query-building pipeline.
//!
//! Everything here is deterministic and allocation-light; the only
//! stateful piece is the [`Lemmatizer`] capability, which is a trait so
//! the reduction rules can be swapped without touching the pipeline.

/// Normalize free-form text for tokenization.
///
/// Lowercases, deletes every character that is not a lowercase ASCII
/// letter, ASCII digit, or whitespace (diacritics, punctuation, and
/// emoji are all dropped), then strips leading/trailing whitespace.
/// Trimming last makes the function idempotent:
/// `normalize(normalize(x)) == normalize(x)` for all `x`.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    cleaned.trim().to_owned()
}

/// Split normalized text into whitespace-delimited tokens.
///
/// Runs of whitespace collapse; no alphabetic token is merged or
/// dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Returns `true` when `token` is in the embedded English stopword set.
///
/// The inventory is the standard NLTK English stopword list, kept
/// unmodified. Entries with apostrophes cannot match normalized tokens
/// (normalization strips the apostrophe first) and are inert.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// English stopword inventory (NLTK list).
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Noun-form reduction capability.
///
/// `Send + Sync` so one instance serves concurrent requests read-only.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a single lowercase word to its noun lemma
    /// (e.g. `"dogs"` → `"dog"`). Words with no applicable reduction are
    /// returned unchanged.
    fn lemmatize_noun(&self, word: &str) -> String;
}

/// Irregular plurals and invariant nouns the suffix rules would mangle.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("people", "person"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
];

/// Ordered detachment rules, longest suffix first.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
    ("s", ""),
];

/// Rule-based noun lemmatizer.
///
/// Applies a small irregular-plural table, then the first matching
/// suffix detachment rule. Output can differ from dictionary-backed
/// lemmatization for irregular vocabulary outside the exception table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize_noun(&self, word: &str) -> String {
        if let Some(&(_, lemma)) = NOUN_EXCEPTIONS.iter().find(|(plural, _)| *plural == word) {
            return lemma.to_owned();
        }

        // Short words and non-plural s-endings pass through unchanged.
        if word.len() <= 3 || word.ends_with("ss") || word.ends_with("us") || word.ends_with("is")
        {
            return word.to_owned();
        }

        for &(suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                // Never reduce to an empty or single-letter stem.
                if stem.len() >= 2 {
                    return format!("{stem}{replacement}");
                }
            }
        }

        word.to_owned()
    }
}
