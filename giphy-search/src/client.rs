//! The GIPHY sticker search client.
//!
//! [`GiphyClient`] wraps a reusable [`reqwest::Client`] plus a
//! [`GiphyConfig`] and exposes the two-pass search: primary query first,
//! then one fallback pass with the configured fallback query (limit 1)
//! when the primary pass matches nothing.

use crate::api::{self, SearchResponse};
use crate::config::GiphyConfig;
use crate::error::GiphyError;
use crate::http;
use crate::types::{DegradeReason, SearchOutcome, StickerResult};

/// Reusable GIPHY sticker search client.
///
/// Safe to share across concurrent requests; all state is read-only
/// after construction.
#[derive(Debug, Clone)]
pub struct GiphyClient {
    http: reqwest::Client,
    config: GiphyConfig,
}

impl GiphyClient {
    /// Build a client from config.
    ///
    /// # Errors
    ///
    /// Returns [`GiphyError::Config`] if the config fails validation, or
    /// [`GiphyError::Http`] if the underlying HTTP client cannot be
    /// constructed. A missing API key is not an error; it puts the
    /// client in degraded mode.
    pub fn new(config: GiphyConfig) -> Result<Self, GiphyError> {
        config.validate()?;
        let http = http::build_client(&config)?;
        Ok(Self { http, config })
    }

    /// Returns `true` when an API credential is configured.
    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Search GIPHY stickers for `query`.
    ///
    /// Never returns an error and never an empty degraded list:
    ///
    /// 1. No credential configured → [`SearchOutcome::Degraded`] with
    ///    [`DegradeReason::MissingApiKey`], no network call.
    /// 2. Primary pass: GET the sticker-search endpoint, parse up to
    ///    `limit` entries.
    /// 3. Zero results → one fallback pass with the configured fallback
    ///    query, same rating, limit 1. Its results (possibly none) are
    ///    returned as-is.
    /// 4. Transport, status, or decode failures in either pass →
    ///    [`SearchOutcome::Degraded`] with the matching reason.
    pub async fn search_stickers(
        &self,
        query: &str,
        rating: &str,
        limit: usize,
    ) -> SearchOutcome {
        let Some(api_key) = self.config.api_key.clone() else {
            tracing::warn!("no GIPHY API key configured, degrading to placeholder result");
            return SearchOutcome::Degraded(DegradeReason::MissingApiKey);
        };

        tracing::debug!(query, rating, limit, "searching GIPHY stickers");

        match self.fetch(&api_key, query, rating, limit).await {
            Ok(results) if !results.is_empty() => SearchOutcome::Found(results),
            Ok(_) => {
                tracing::debug!(
                    query,
                    fallback = %self.config.fallback_query,
                    "no results from primary query, trying fallback"
                );
                match self
                    .fetch(&api_key, &self.config.fallback_query, rating, 1)
                    .await
                {
                    Ok(results) => SearchOutcome::Found(results),
                    Err(err) => {
                        tracing::warn!(error = %err, "fallback sticker search failed");
                        SearchOutcome::Degraded(err.degrade_reason())
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "sticker search failed");
                SearchOutcome::Degraded(err.degrade_reason())
            }
        }
    }

    /// One GET against the sticker-search endpoint.
    async fn fetch(
        &self,
        api_key: &str,
        query: &str,
        rating: &str,
        limit: usize,
    ) -> Result<Vec<StickerResult>, GiphyError> {
        let url = format!(
            "{}/v1/stickers/search",
            self.config.base_url.trim_end_matches('/')
        );
        let limit_param = limit.to_string();
        let params = [
            ("api_key", api_key),
            ("q", query),
            ("limit", limit_param.as_str()),
            ("rating", rating),
            ("bundle", self.config.bundle.as_str()),
        ];

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| GiphyError::Http(format!("GIPHY request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GiphyError::Status(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| GiphyError::Decode(format!("GIPHY response decode failed: {e}")))?;

        Ok(api::parse_results(body, limit))
    }
}
