//! Scrapers for fetching data from each upstream source.
//!
//! This module contains one submodule per upstream source. Each scraper is a
//! small struct built from [`AppConfig`](crate::config::AppConfig) (endpoint
//! URL plus credential where one is needed) with a single async fetch method.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | CoinMarketCap | [`coinmarketcap`] | HTML scraping | Top 5 listing rows, fixed column positions |
//! | CryptoNews | [`cryptonews`] | HTML scraping | Top 5 headline elements |
//! | NewsAPI | [`newsapi`] | JSON search API | Requires API key; top 5 articles verbatim |
//! | OpenWeatherMap | [`openweather`] | JSON API | Requires API key; body passed through |
//!
//! # Common Patterns
//!
//! Every fetch method returns `Result<T, FetchError>` so callers can tell an
//! empty result apart from a failed call. Scrapers log their own outcome
//! (count on success, rendered error on failure) and never panic; each call
//! builds and discards its own HTTP client, so nothing is shared between
//! concurrent fetches.

pub mod coinmarketcap;
pub mod cryptonews;
pub mod newsapi;
pub mod openweather;

use std::time::Duration;
use thiserror::Error;

/// Fixed truncation applied to every ranked result list.
pub const TOP_N: usize = 5;

/// Listing and headline pages refuse the default reqwest user agent, so all
/// requests go out under a browser one.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/120.0.0.0 Safari/537.36";

/// Why a fetch failed, by category.
///
/// One variant per failure class a scraper can hit: the transport itself,
/// the shape of what came back, an explicit upstream error status, or a
/// missing credential. The shell prints these; the digest records them as
/// `source: reason` lines.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS, or timeout failure from the HTTP layer.
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response arrived but did not have the expected structure.
    #[error("response shape: {0}")]
    Shape(String),

    /// The upstream service reported a failure status with a message body.
    #[error("upstream ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// A required credential or setting is absent.
    #[error("config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Shape(e.to_string())
    }
}

/// Build the throwaway client used for a single fetch.
///
/// The timeout bounds how long one call can hold the shell; it surfaces as a
/// [`FetchError::Transport`] like any other transport failure.
pub(crate) fn http_client() -> Result<reqwest::Client, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}

/// Turn a non-success response into an [`FetchError::Upstream`].
///
/// Both APIs put a human-readable `message` field in their error bodies;
/// when it is missing (a proxy error page, say) a truncated body preview
/// stands in.
pub(crate) fn upstream_error(status: reqwest::StatusCode, body: &str) -> FetchError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| crate::utils::truncate_for_log(body.trim(), 120));

    FetchError::Upstream {
        status: status.as_u16(),
        message,
    }
}
