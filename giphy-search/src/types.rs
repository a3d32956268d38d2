//! Core types for sticker search results and degraded outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// GIPHY homepage, used as the attribution fallback and as the base of
/// every placeholder URL.
pub const GIPHY_HOMEPAGE: &str = "https://giphy.com/";

/// A single sticker returned from a GIPHY search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerResult {
    /// URL of the original (typically animated) sticker asset.
    pub url: String,
    /// URL of a smaller preview GIF, empty when the provider omits one.
    pub preview: String,
    /// Attribution URL for the sticker's source post.
    pub source: String,
}

impl StickerResult {
    /// Build the sentinel placeholder returned in place of real results
    /// when a search degrades.
    ///
    /// The placeholder URL varies by [`DegradeReason`] so callers can tell
    /// from the payload alone why the search degraded.
    pub fn placeholder(reason: DegradeReason) -> Self {
        Self {
            url: format!("{GIPHY_HOMEPAGE}{}", reason.slug()),
            preview: String::new(),
            source: GIPHY_HOMEPAGE.to_owned(),
        }
    }
}

/// Why a sticker search degraded instead of returning provider results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegradeReason {
    /// No API credential was configured; no network call was attempted.
    MissingApiKey,
    /// The request never completed (DNS, connect, or timeout failure).
    Transport,
    /// GIPHY answered with a non-2xx status.
    UpstreamStatus,
    /// The response arrived but could not be decoded.
    Unexpected,
}

impl DegradeReason {
    /// Returns the diagnostic path segment appended to the GIPHY homepage
    /// in the placeholder URL for this reason.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "sticker-not-found-no-api-key",
            Self::Transport => "sticker-not-found-network-error",
            Self::UpstreamStatus => "sticker-not-found-http-error",
            Self::Unexpected => "sticker-not-found-unexpected-error",
        }
    }

    /// Returns all reason variants.
    pub fn all() -> &'static [DegradeReason] {
        &[
            Self::MissingApiKey,
            Self::Transport,
            Self::UpstreamStatus,
            Self::Unexpected,
        ]
    }
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Outcome of a sticker search.
///
/// The fetcher never raises toward HTTP callers: provider and transport
/// failures are folded into [`SearchOutcome::Degraded`], and the caller
/// decides how to render the degraded state. [`SearchOutcome::Found`] may
/// carry an empty vector when both the primary query and the fallback
/// query matched nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The provider answered; up to `limit` parsed results.
    Found(Vec<StickerResult>),
    /// The search could not be completed; see the reason.
    Degraded(DegradeReason),
}

impl SearchOutcome {
    /// Collapse into the list shape HTTP callers receive: a degraded
    /// outcome becomes exactly one placeholder result.
    pub fn into_results(self) -> Vec<StickerResult> {
        match self {
            Self::Found(results) => results,
            Self::Degraded(reason) => vec![StickerResult::placeholder(reason)],
        }
    }

    /// Returns `true` for degraded outcomes.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}
