//! sticker-mood: emotion-driven GIPHY sticker search service.
//!
//! Two components, invoked per request, with no shared mutable state
//! beyond startup configuration:
//!
//! - **Query Builder** ([`query`]) — normalizes free-form text, detects
//!   a dominant emotion label via a pluggable scorer, extracts the most
//!   frequent meaningful keyword, and composes `emotion keyword` as the
//!   search string.
//! - **Sticker Fetcher** (the `giphy-search` crate) — resolves a search
//!   string to a list of sticker results, with a single built-in
//!   fallback pass and explicit degraded outcomes.
//!
//! The [`server`] module wires both behind three POST endpoints plus a
//! health probe. Query-building failures surface as HTTP 500; sticker
//! fetching always answers with the fixed result shape, degrading to a
//! placeholder instead of erroring.

pub mod config;
pub mod emotion;
pub mod error;
pub mod query;
pub mod server;
pub mod text;

pub use config::ServiceConfig;
pub use error::{QueryError, Result, ServiceError};
pub use query::QueryBuilder;
pub use server::StickerServer;
