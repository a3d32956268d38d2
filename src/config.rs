//! Service configuration, read once from the environment at startup.

use giphy_search::GiphyConfig;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Top-level configuration for the sticker-mood service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// GIPHY client configuration, credential included.
    pub giphy: GiphyConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8000,
            giphy: GiphyConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment.
    ///
    /// `STICKER_MOOD_HOST` and `STICKER_MOOD_PORT` override the listen
    /// address. `GIPHY_API_KEY` supplies the provider credential; its
    /// absence is logged but never fatal — the service starts in
    /// degraded sticker mode and every search returns the no-credential
    /// placeholder.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = env::var("STICKER_MOOD_HOST").unwrap_or(defaults.host);
        let port = parse_or("STICKER_MOOD_PORT", defaults.port);

        let api_key = env::var("GIPHY_API_KEY")
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            tracing::warn!(
                "GIPHY_API_KEY not set; sticker search will return placeholder results"
            );
        }

        Self {
            host,
            port,
            giphy: GiphyConfig {
                api_key,
                ..defaults.giphy
            },
        }
    }
}

/// Parse an environment variable, falling back to `default` when the
/// variable is unset or malformed.
fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("invalid {key} value {raw:?}: {e}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}
