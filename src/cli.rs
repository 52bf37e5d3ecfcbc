//! Command-line interface definitions for Daybrief.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! API keys can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for the Daybrief application.
///
/// Everything here is optional: with no arguments the shell runs against the
/// built-in endpoints, and the API-backed menu options report a missing
/// credential instead of fetching.
///
/// # Examples
///
/// ```sh
/// # Built-in defaults, keys from the environment
/// NEWS_API_KEY=... WEATHER_API_KEY=... daybrief
///
/// # Explicit config file
/// daybrief -c ./config.yaml
///
/// # Keys as flags (override the config file)
/// daybrief --news-api-key YOUR_KEY --weather-api-key YOUR_KEY
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,

    /// News search API key
    #[arg(long, env = "NEWS_API_KEY")]
    pub news_api_key: Option<String>,

    /// Weather API key
    #[arg(long, env = "WEATHER_API_KEY")]
    pub weather_api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(&[
            "daybrief",
            "--config",
            "./config.yaml",
            "--news-api-key",
            "abc",
        ]);

        assert_eq!(cli.config.as_deref(), Some("./config.yaml"));
        assert_eq!(cli.news_api_key.as_deref(), Some("abc"));
        assert!(cli.weather_api_key.is_none());
    }

    #[test]
    fn test_cli_defaults_to_no_arguments() {
        let cli = Cli::parse_from(&["daybrief"]);

        assert!(cli.config.is_none());
        assert!(cli.news_api_key.is_none());
    }

    #[test]
    fn test_cli_short_config_flag() {
        let cli = Cli::parse_from(&["daybrief", "-c", "/tmp/daybrief.yaml"]);

        assert_eq!(cli.config.as_deref(), Some("/tmp/daybrief.yaml"));
    }
}
