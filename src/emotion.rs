//! Lexicon-based emotion scoring over a fixed five-emotion set.
//!
//! Scores are produced by a fast keyword scan: each emotion owns a small
//! lexicon, hits are counted per emotion over the word tokens of the
//! input, and counts are normalized by the total number of hits. The
//! scorer is a capability trait so the lexicon scan can be replaced by a
//! model-backed implementation without touching the pipeline.

use crate::error::QueryError;

/// Emotion-scoring capability.
///
/// Implementors map input text to the full fixed score vector, one entry
/// per emotion, in a stable order. The pipeline picks the maximum score;
/// ties (including the all-zero case) resolve to the earliest entry, so
/// the vector order is part of the contract.
pub trait EmotionScorer: Send + Sync {
    /// Score `text` against the fixed emotion set.
    ///
    /// # Errors
    ///
    /// The built-in [`LexiconScorer`] never fails, but the seam is
    /// fallible so alternative scorers can report failures; those errors
    /// propagate to the endpoint layer as HTTP 500.
    fn score(&self, text: &str) -> Result<Vec<(String, f32)>, QueryError>;
}

/// (emotion, lexicon) — vector order fixes tie-breaking: earlier entries
/// win ties, and `happy` wins the all-zero case.
const EMOTION_TABLE: &[(&str, &[&str])] = &[
    (
        "happy",
        &[
            "happy", "joy", "joyful", "glad", "great", "love", "loved", "wonderful", "excited",
            "smile", "smiling", "fun", "awesome", "delighted", "cheerful", "yay", "amazing",
            "pleased", "grateful", "proud", "laugh", "excellent", "fantastic", "enjoy", "best",
        ],
    ),
    (
        "angry",
        &[
            "angry", "mad", "furious", "hate", "hated", "annoyed", "rage", "irritated",
            "outraged", "frustrated", "resent", "livid", "fuming", "grr", "unfair",
        ],
    ),
    (
        "surprise",
        &[
            "surprise", "surprised", "wow", "unexpected", "shocked", "astonished", "amazed",
            "sudden", "suddenly", "unbelievable", "whoa", "stunned", "startled",
        ],
    ),
    (
        "sad",
        &[
            "sad", "unhappy", "cry", "crying", "cried", "depressed", "miserable", "lonely",
            "tears", "grief", "heartbroken", "gloomy", "sorrow", "upset", "disappointed",
            "hurt", "miss", "lost",
        ],
    ),
    (
        "fear",
        &[
            "fear", "afraid", "scared", "terrified", "worried", "worry", "anxious", "nervous",
            "panic", "dread", "frightened", "horror", "alarmed", "scary",
        ],
    ),
];

/// Keyword-table emotion scorer.
///
/// Case-insensitive whole-word matching over the input; roughly linear
/// in input length, no allocation beyond the token scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl EmotionScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<Vec<(String, f32)>, QueryError> {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|t| !t.is_empty())
            .collect();

        let hits: Vec<usize> = EMOTION_TABLE
            .iter()
            .map(|(_, lexicon)| tokens.iter().filter(|t| lexicon.contains(t)).count())
            .collect();
        let total: usize = hits.iter().sum();

        Ok(EMOTION_TABLE
            .iter()
            .zip(hits)
            .map(|(&(label, _), count)| {
                let score = if total == 0 {
                    0.0
                } else {
                    count as f32 / total as f32
                };
                (label.to_owned(), score)
            })
            .collect())
    }
}
