//! Client configuration with sensible defaults.
//!
//! [`GiphyConfig`] controls the credential, endpoint base, timeout, and the
//! fixed fallback query used when a search matches nothing.

use crate::error::GiphyError;

/// Default fallback query substituted when the primary query matches nothing.
pub const DEFAULT_FALLBACK_QUERY: &str = "happy";

/// Configuration for the GIPHY sticker search client.
///
/// Use [`Default::default()`] and set `api_key`, or construct with field
/// overrides for custom behaviour (tests point `base_url` at a local stub).
#[derive(Debug, Clone)]
pub struct GiphyConfig {
    /// GIPHY API credential. `None` puts the client in degraded mode:
    /// every search returns the no-credential placeholder without a
    /// network call.
    pub api_key: Option<String>,
    /// Base URL of the GIPHY API.
    pub base_url: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Content-bundle filter sent with every request.
    pub bundle: String,
    /// Query substituted for the single fallback pass when the primary
    /// query returns zero results.
    pub fallback_query: String,
}

impl Default for GiphyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.giphy.com".to_owned(),
            timeout_seconds: 10,
            bundle: "messaging_non_clips".to_owned(),
            fallback_query: DEFAULT_FALLBACK_QUERY.to_owned(),
        }
    }
}

impl GiphyConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `base_url` must not be empty
    /// - `timeout_seconds` must be greater than 0
    /// - `fallback_query` must not be empty
    pub fn validate(&self) -> Result<(), GiphyError> {
        if self.base_url.trim().is_empty() {
            return Err(GiphyError::Config("base_url must not be empty".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(GiphyError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.fallback_query.trim().is_empty() {
            return Err(GiphyError::Config(
                "fallback_query must not be empty".into(),
            ));
        }
        Ok(())
    }
}
