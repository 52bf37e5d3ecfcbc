//! Configuration for endpoints, credentials, and prompt defaults.
//!
//! Everything the scrapers and the shell read at runtime lives in one
//! [`AppConfig`]: upstream endpoint URLs, API keys, and the fallback values
//! used when a prompt is left blank. A YAML file can override any subset of
//! it; command-line flags (or their environment variables) override the keys
//! on top of that. Nothing is compiled in except the defaults below.
//!
//! # Example config.yaml
//!
//! ```yaml
//! news_api_key: "..."
//! weather_api_key: "..."
//! defaults:
//!   weather_location: "Nairobi"
//! ```

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path}: {reason}")]
    File { path: String, reason: String },

    #[error("invalid {name} url {url:?}: {reason}")]
    Endpoint {
        name: &'static str,
        url: String,
        reason: String,
    },
}

/// Where each upstream source lives.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Endpoints {
    /// Market listing page scraped for ranked asset prices.
    pub market_listing_url: String,
    /// Headline page scraped for crypto news titles.
    pub crypto_headlines_url: String,
    /// News search API endpoint.
    pub news_api_url: String,
    /// Current-weather API endpoint.
    pub weather_api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            market_listing_url: "https://coinmarketcap.com/".to_string(),
            crypto_headlines_url: "https://cryptonews.com/".to_string(),
            news_api_url: "https://newsapi.org/v2/everything".to_string(),
            weather_api_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
        }
    }
}

/// Fallback values for the shell's free-text prompts.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Defaults {
    pub news_topic: String,
    pub news_language: String,
    pub weather_location: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            news_topic: "technology".to_string(),
            news_language: "en".to_string(),
            weather_location: "Addis Ababa".to_string(),
        }
    }
}

/// Runtime configuration assembled from defaults, file, and flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Credential for the news search API.
    pub news_api_key: Option<String>,
    /// Credential for the weather API.
    pub weather_api_key: Option<String>,
    pub endpoints: Endpoints,
    pub defaults: Defaults,
}

impl AppConfig {
    /// Parse a YAML config file; missing fields keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        serde_yaml::from_str(&raw).map_err(|e| ConfigError::File {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Check that every endpoint is an absolute, parseable URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoints = [
            ("market listing", &self.endpoints.market_listing_url),
            ("crypto headlines", &self.endpoints.crypto_headlines_url),
            ("news api", &self.endpoints.news_api_url),
            ("weather api", &self.endpoints.weather_api_url),
        ];

        for (name, url) in endpoints {
            Url::parse(url).map_err(|e| ConfigError::Endpoint {
                name,
                url: url.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }
}

/// Assemble the runtime configuration from an optional file plus CLI
/// overrides, validating endpoints before anything goes on the wire.
pub fn load(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let config = AppConfig::from_file(path)?;
            info!(path = %path, "Loaded configuration file");
            config
        }
        None => {
            debug!("No config file given; using built-in defaults");
            AppConfig::default()
        }
    };

    if let Some(key) = &cli.news_api_key {
        config.news_api_key = Some(key.clone());
    }
    if let Some(key) = &cli.weather_api_key {
        config.weather_api_key = Some(key.clone());
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_endpoints_and_prompts() {
        let config = AppConfig::default();
        assert_eq!(config.endpoints.market_listing_url, "https://coinmarketcap.com/");
        assert_eq!(config.endpoints.news_api_url, "https://newsapi.org/v2/everything");
        assert_eq!(
            config.endpoints.weather_api_url,
            "https://api.openweathermap.org/data/2.5/weather"
        );
        assert_eq!(config.defaults.news_topic, "technology");
        assert_eq!(config.defaults.news_language, "en");
        assert_eq!(config.defaults.weather_location, "Addis Ababa");
        assert!(config.news_api_key.is_none());
        assert!(config.weather_api_key.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults_elsewhere() {
        let yaml = "news_api_key: abc123\nendpoints:\n  news_api_url: http://127.0.0.1:8080/everything\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.news_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.endpoints.news_api_url, "http://127.0.0.1:8080/everything");
        assert_eq!(config.endpoints.market_listing_url, "https://coinmarketcap.com/");
        assert_eq!(config.defaults.weather_location, "Addis Ababa");
    }

    #[test]
    fn test_validate_rejects_relative_endpoint() {
        let mut config = AppConfig::default();
        config.endpoints.weather_api_url = "not a url".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Endpoint { name: "weather api", .. }));
    }

    #[test]
    fn test_cli_flags_override_keys() {
        let cli = Cli::parse_from([
            "daybrief",
            "--news-api-key",
            "from-flag",
            "--weather-api-key",
            "also-from-flag",
        ]);

        let config = load(&cli).unwrap();
        assert_eq!(config.news_api_key.as_deref(), Some("from-flag"));
        assert_eq!(config.weather_api_key.as_deref(), Some("also-from-flag"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = AppConfig::from_file("/nonexistent/daybrief.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::File { .. }));
    }

    #[test]
    fn test_config_file_round_trip() {
        let path = std::env::temp_dir().join(format!("daybrief-config-{}.yaml", std::process::id()));
        let yaml = "weather_api_key: wkey\ndefaults:\n  weather_location: Nairobi\n";
        fs::write(&path, yaml).unwrap();

        let config = AppConfig::from_file(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.weather_api_key.as_deref(), Some("wkey"));
        assert_eq!(config.defaults.weather_location, "Nairobi");
        assert_eq!(config.defaults.news_topic, "technology");
    }
}
