//! Concurrent fetch across every primary source.
//!
//! [`fetch_all`] is the library-surface composite: it starts the market,
//! news, and weather fetches together, waits for all of them, and merges
//! whatever came back into one [`Digest`]. A failed branch leaves its field
//! at the empty default and records the reason; it never takes the other
//! branches down with it, and nothing returns before the slowest branch
//! lands. The interactive shell does not call this; it exists for consumers
//! that want the whole briefing in one await.

use crate::config::AppConfig;
use crate::models::{Digest, WeatherReport};
use crate::scrapers::coinmarketcap::CoinMarketCap;
use crate::scrapers::newsapi::NewsApi;
use crate::scrapers::openweather::OpenWeather;
use chrono::Local;
use tracing::{info, instrument, warn};

/// Fetch prices, news, and weather concurrently and merge the outcomes.
///
/// The news language comes from the configured default alongside the caller's
/// topic and location.
#[instrument(skip(config))]
pub async fn fetch_all(config: &AppConfig, topic: &str, location: &str) -> Digest {
    let markets = CoinMarketCap::new(config);
    let news = NewsApi::new(config);
    let weather = OpenWeather::new(config);

    let (prices, articles, report) = futures::join!(
        markets.fetch_top_asset_prices(),
        news.fetch_latest_news(topic, &config.defaults.news_language),
        weather.fetch_latest_weather(location),
    );

    let mut digest = Digest {
        fetched_at: Local::now().to_rfc3339(),
        crypto_prices: Vec::new(),
        news_articles: Vec::new(),
        weather_report: WeatherReport::new(),
        fetch_errors: Vec::new(),
    };

    match prices {
        Ok(quotes) => digest.crypto_prices = quotes,
        Err(e) => digest.fetch_errors.push(format!("coinmarketcap: {e}")),
    }
    match articles {
        Ok(items) => digest.news_articles = items,
        Err(e) => digest.fetch_errors.push(format!("newsapi: {e}")),
    }
    match report {
        Ok(mapping) => digest.weather_report = mapping,
        Err(e) => digest.fetch_errors.push(format!("openweather: {e}")),
    }

    if digest.is_complete() {
        info!(
            prices = digest.crypto_prices.len(),
            articles = digest.news_articles.len(),
            "Digest assembled from all sources"
        );
    } else {
        warn!(
            failed = digest.fetch_errors.len(),
            errors = ?digest.fetch_errors,
            "Digest assembled with failed branches"
        );
    }

    digest
}
