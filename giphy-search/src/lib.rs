//! # giphy-search
//!
//! GIPHY sticker search client with explicit degraded outcomes.
//!
//! This crate wraps the GIPHY `stickers/search` REST endpoint for the
//! sticker-mood service. It is deliberately small: one bounded HTTP GET
//! with a fixed timeout, a single built-in fallback pass, and a result
//! type that makes the degraded path explicit instead of hiding it
//! behind caught exceptions.
//!
//! ## Design
//!
//! - [`SearchOutcome`] separates "provider answered" from "search
//!   degraded"; callers decide how to render degraded states
//! - A missing API key is a supported configuration (degraded mode),
//!   never a construction error or a panic
//! - Zero primary results trigger exactly one fallback request with the
//!   configured fallback query at limit 1
//! - Transport failures, non-2xx statuses, and decode failures all fold
//!   into [`SearchOutcome::Degraded`] with a diagnostic reason
//!
//! ## Security
//!
//! - The API key is sent only as a query parameter to the configured
//!   base URL and never appears in logs or error messages
//! - Search queries are logged at debug level only

pub mod config;
pub mod error;
pub mod http;
pub mod types;

mod api;
mod client;

pub use client::GiphyClient;
pub use config::GiphyConfig;
pub use error::{GiphyError, Result};
pub use types::{DegradeReason, SearchOutcome, StickerResult, GIPHY_HOMEPAGE};

/// Search GIPHY stickers with a one-shot client.
///
/// Convenience wrapper for callers without a long-lived [`GiphyClient`]:
/// builds a client from `config`, runs the search, and maps construction
/// failures into a degraded outcome so the caller still receives the
/// fixed result shape.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let config = giphy_search::GiphyConfig {
///     api_key: Some("dc6zaTOxFJmzC".into()),
///     ..Default::default()
/// };
/// let outcome = giphy_search::search("happy puppy", "g", 3, &config).await;
/// for sticker in outcome.into_results() {
///     println!("{}", sticker.url);
/// }
/// # }
/// ```
pub async fn search(
    query: &str,
    rating: &str,
    limit: usize,
    config: &GiphyConfig,
) -> SearchOutcome {
    match GiphyClient::new(config.clone()) {
        Ok(client) => client.search_stickers(query, rating, limit).await,
        Err(err) => {
            tracing::warn!(error = %err, "failed to build GIPHY client");
            SearchOutcome::Degraded(err.degrade_reason())
        }
    }
}
