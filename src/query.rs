//! Query building: free-form text → GIPHY search string.
//!
//! The pipeline combines the detected emotion label with the most
//! frequent meaningful keyword of the text:
//!
//! 1. Empty input short-circuits to an empty query
//! 2. Normalize and tokenize the text
//! 3. Score emotions on the *original* text and pick the top label
//! 4. Filter tokens (alphabetic, non-stopword), lemmatize as nouns, and
//!    pick the most frequent lemma (ties keep first-encountered order)
//! 5. Join label and keyword with a space, omitting empty parts
//!
//! Capability failures are not caught here; they propagate so the
//! endpoint layer can answer HTTP 500. The sticker fetcher degrades
//! instead — that asymmetry is intentional.

use crate::emotion::{EmotionScorer, LexiconScorer};
use crate::error::QueryError;
use crate::text::{self, Lemmatizer, RuleLemmatizer};
use std::collections::HashMap;

/// Immutable query-building toolkit, built once at startup and shared
/// read-only across concurrent requests.
pub struct QueryBuilder {
    scorer: Box<dyn EmotionScorer>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl QueryBuilder {
    /// Build a pipeline from explicit capabilities.
    pub fn new(scorer: Box<dyn EmotionScorer>, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self { scorer, lemmatizer }
    }

    /// Build a pipeline with the built-in lexicon scorer and rule
    /// lemmatizer.
    pub fn with_defaults() -> Self {
        Self::new(Box::new(LexiconScorer), Box::new(RuleLemmatizer))
    }

    /// Derive a sticker search query from free-form text.
    ///
    /// Returns an empty string for empty or all-whitespace input without
    /// invoking any capability. A non-empty input with at least one
    /// alphabetic non-stopword token always yields a non-empty query.
    ///
    /// # Errors
    ///
    /// Propagates [`QueryError`] from the emotion-scoring capability.
    pub fn build_search_query(&self, input: &str) -> Result<String, QueryError> {
        if input.trim().is_empty() {
            return Ok(String::new());
        }

        let normalized = text::normalize(input);
        let tokens = text::tokenize(&normalized);

        // Emotion scoring sees the original text; only keyword
        // extraction works on the normalized tokens.
        let label = self.detect_emotion_label(input)?;
        let keyword = self.top_keyword(&tokens);

        let parts: Vec<&str> = [label.as_str(), keyword.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        Ok(parts.join(" "))
    }

    /// Pick the lowercase emotion label with the maximum score.
    ///
    /// Strictly-greater comparison keeps the scorer's first entry on
    /// ties, which also covers the all-zero score vector.
    pub fn detect_emotion_label(&self, input: &str) -> Result<String, QueryError> {
        let scores = self.scorer.score(input)?;

        let mut best: Option<(&str, f32)> = None;
        for (label, score) in &scores {
            match best {
                Some((_, best_score)) if *score <= best_score => {}
                _ => best = Some((label.as_str(), *score)),
            }
        }

        Ok(best.map(|(label, _)| label.to_lowercase()).unwrap_or_default())
    }

    /// The most frequent noun lemma among alphabetic non-stopword
    /// tokens, or an empty string if nothing qualifies.
    fn top_keyword(&self, tokens: &[&str]) -> String {
        // (count, first-seen index) per lemma; the index makes ties
        // resolve to first-encountered order.
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        let mut order = 0usize;

        for token in tokens {
            if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            if text::is_stopword(token) {
                continue;
            }
            let lemma = self.lemmatizer.lemmatize_noun(token);
            let entry = counts.entry(lemma).or_insert((0, order));
            entry.0 += 1;
            order += 1;
        }

        counts
            .into_iter()
            .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
            .map(|(lemma, _)| lemma)
            .unwrap_or_default()
    }
}
