//! Error types internal to the giphy-search crate.
//!
//! These errors never cross the crate boundary on the search path: the
//! public [`search_stickers`](crate::GiphyClient::search_stickers) API
//! folds them into [`SearchOutcome::Degraded`](crate::SearchOutcome).
//! API keys never appear in error messages.

use crate::types::DegradeReason;

/// Errors that can occur while talking to the GIPHY API.
#[derive(Debug, thiserror::Error)]
pub enum GiphyError {
    /// The HTTP request never completed (DNS, connect, or timeout).
    #[error("HTTP error: {0}")]
    Http(String),

    /// GIPHY answered with a non-2xx status.
    #[error("GIPHY returned status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl GiphyError {
    /// Map this error onto the degraded-outcome taxonomy.
    pub(crate) fn degrade_reason(&self) -> DegradeReason {
        match self {
            Self::Http(_) => DegradeReason::Transport,
            Self::Status(_) => DegradeReason::UpstreamStatus,
            Self::Decode(_) | Self::Config(_) => DegradeReason::Unexpected,
        }
    }
}

/// Convenience type alias for giphy-search results.
pub type Result<T> = std::result::Result<T, GiphyError>;
