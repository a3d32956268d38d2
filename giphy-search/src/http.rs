//! Shared HTTP client construction for GIPHY API requests.

use crate::config::GiphyConfig;
use crate::error::GiphyError;
use std::time::Duration;

/// Build a [`reqwest::Client`] configured for GIPHY API calls.
///
/// The client carries the per-request timeout from config; a timed-out
/// request surfaces as a transport failure, never as a hang.
///
/// # Errors
///
/// Returns [`GiphyError::Http`] if the client cannot be constructed.
pub fn build_client(config: &GiphyConfig) -> Result<reqwest::Client, GiphyError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| GiphyError::Http(format!("failed to build HTTP client: {e}")))
}
