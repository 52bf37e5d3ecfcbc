//! Data models for fetched market, news, and weather data.
//!
//! This module defines the core data structures used throughout the application:
//! - [`PriceQuote`]: One ranked asset from the market listing page
//! - [`NewsArticle`]: One article from the news search API, passed through verbatim
//! - [`WeatherReport`]: The weather API's JSON body, passed through verbatim
//! - [`Digest`]: The combined result of one concurrent fetch of all three sources
//!
//! Quotes keep their upstream display strings rather than parsed numerics, and
//! articles keep every upstream field via flattened passthrough maps, so what
//! goes out over serialization is what came in off the wire.

use serde::{Deserialize, Serialize};

/// A single ranked asset scraped from the market listing page.
///
/// Both fields are display strings exactly as rendered upstream (including
/// currency symbols and separators). The literal `"N/A"` marks a cell whose
/// expected link element was absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriceQuote {
    /// The asset name as shown in the listing row.
    pub name: String,
    /// The asset price as shown in the listing row.
    pub price: String,
}

/// The publisher of a [`NewsArticle`].
///
/// Only `name` is read by the presentation shell; every other upstream field
/// survives in `extra`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewsSource {
    /// Human-readable publisher name.
    #[serde(default)]
    pub name: String,
    /// Remaining upstream fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One article from the news search API.
///
/// The shell displays `title` and `source.name`; everything else the API
/// sent rides along in `extra` so the article re-serializes to the same
/// object it was parsed from.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewsArticle {
    /// The article headline.
    #[serde(default)]
    pub title: String,
    /// The publishing outlet.
    #[serde(default)]
    pub source: NewsSource,
    /// Remaining upstream fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The weather API's JSON body, kept as an untyped mapping.
///
/// An empty mapping is the degraded value a failed fetch collapses to at the
/// aggregation boundary.
pub type WeatherReport = serde_json::Map<String, serde_json::Value>;

/// The combined result of one concurrent fetch of all three sources.
///
/// Each field holds whatever its branch produced; a failed branch leaves its
/// field at the empty default and contributes one line to `fetch_errors`, so
/// a consumer can tell "nothing upstream" apart from "the call failed".
#[derive(Debug, Deserialize, Serialize)]
pub struct Digest {
    /// RFC 3339 local timestamp taken when the fetch completed.
    pub fetched_at: String,
    /// Top-ranked asset quotes, in listing order.
    pub crypto_prices: Vec<PriceQuote>,
    /// Latest articles for the requested topic, in API order.
    pub news_articles: Vec<NewsArticle>,
    /// Current weather for the requested location.
    pub weather_report: WeatherReport,
    /// One `source: reason` line per failed branch.
    pub fetch_errors: Vec<String>,
}

impl Digest {
    /// True when every branch of the fetch succeeded.
    pub fn is_complete(&self) -> bool {
        self.fetch_errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_quote_serde_round_trip() {
        let quote = PriceQuote {
            name: "Bitcoin".to_string(),
            price: "$97,412.18".to_string(),
        };

        let json = serde_json::to_string(&quote).unwrap();
        let back: PriceQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }

    #[test]
    fn test_news_article_passthrough_unchanged() {
        let raw = serde_json::json!({
            "title": "Chip startup raises round",
            "source": {"id": "the-verge", "name": "The Verge"},
            "author": "A. Writer",
            "url": "https://example.com/chips",
            "publishedAt": "2025-11-02T08:00:00Z"
        });

        let article: NewsArticle = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(article.title, "Chip startup raises round");
        assert_eq!(article.source.name, "The Verge");

        let back = serde_json::to_value(&article).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_news_article_missing_fields_default() {
        let article: NewsArticle = serde_json::from_str("{}").unwrap();
        assert_eq!(article.title, "");
        assert_eq!(article.source.name, "");
        assert!(article.extra.is_empty());
    }

    #[test]
    fn test_digest_serialization() {
        let digest = Digest {
            fetched_at: "2025-11-02T07:30:00+03:00".to_string(),
            crypto_prices: vec![PriceQuote {
                name: "Ethereum".to_string(),
                price: "$3,120.44".to_string(),
            }],
            news_articles: vec![],
            weather_report: WeatherReport::new(),
            fetch_errors: vec!["newsapi: config: news api key not configured".to_string()],
        };

        let json = serde_json::to_string(&digest).unwrap();
        assert!(json.contains("Ethereum"));
        assert!(json.contains("fetch_errors"));
        assert!(!digest.is_complete());
    }

    #[test]
    fn test_digest_complete_when_no_errors() {
        let digest = Digest {
            fetched_at: "2025-11-02T07:30:00+03:00".to_string(),
            crypto_prices: vec![],
            news_articles: vec![],
            weather_report: WeatherReport::new(),
            fetch_errors: vec![],
        };
        assert!(digest.is_complete());
    }
}
