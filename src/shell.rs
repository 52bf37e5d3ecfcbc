//! Interactive menu over stdin/stdout.
//!
//! One pass, no retry loop: print the menu, read a selection, run exactly one
//! fetch, print its result, done. The shell is generic over its input and
//! output streams so tests can drive it with in-memory buffers; [`run`] binds
//! the real stdin and stdout.

use crate::config::AppConfig;
use crate::models::{NewsArticle, PriceQuote, WeatherReport};
use crate::scrapers::coinmarketcap::CoinMarketCap;
use crate::scrapers::newsapi::NewsApi;
use crate::scrapers::openweather::OpenWeather;
use itertools::Itertools;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// One menu choice, parsed from the operator's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    CryptoPrices,
    LatestNews,
    WeatherReport,
    OutOfRange,
}

/// Parse the menu line. `None` means the input was not an integer at all;
/// an integer outside 1 to 3 parses to [`Selection::OutOfRange`].
pub fn parse_selection(line: &str) -> Option<Selection> {
    match line.trim().parse::<i64>() {
        Ok(1) => Some(Selection::CryptoPrices),
        Ok(2) => Some(Selection::LatestNews),
        Ok(3) => Some(Selection::WeatherReport),
        Ok(_) => Some(Selection::OutOfRange),
        Err(_) => None,
    }
}

/// Render quotes as `name: price` lines.
pub fn format_prices(quotes: &[PriceQuote]) -> String {
    quotes
        .iter()
        .map(|quote| format!("{}: {}", quote.name, quote.price))
        .join("\n")
}

/// Render articles as `title - source` lines.
pub fn format_articles(articles: &[NewsArticle]) -> String {
    articles
        .iter()
        .map(|article| format!("{} - {}", article.title, article.source.name))
        .join("\n")
}

/// Render the weather mapping as pretty-printed JSON.
pub fn format_weather(report: &WeatherReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

fn prompt_or_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    fallback: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let entered = line.trim();
    if entered.is_empty() {
        Ok(fallback.to_string())
    } else {
        Ok(entered.to_string())
    }
}

/// Run one menu interaction against real stdin/stdout.
pub async fn run(config: &AppConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_with(config, &mut input, &mut output).await
}

/// Run one menu interaction over arbitrary streams.
pub async fn run_with<R, W>(config: &AppConfig, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to Daybrief!")?;
    writeln!(output, "Select an option:")?;
    writeln!(output, "1. Fetch Cryptocurrency Prices")?;
    writeln!(output, "2. Fetch Latest News")?;
    writeln!(output, "3. Fetch Weather Report")?;
    write!(output, "Enter your choice (1-3): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let Some(selection) = parse_selection(&line) else {
        writeln!(output, "Invalid input. Please enter a number between 1 and 3.")?;
        return Ok(());
    };
    debug!(?selection, "Parsed menu selection");

    match selection {
        Selection::CryptoPrices => {
            let markets = CoinMarketCap::new(config);
            let outcome = markets.fetch_top_asset_prices().await;

            writeln!(output, "\n--- Cryptocurrency Prices ---")?;
            match outcome {
                Ok(quotes) if quotes.is_empty() => {
                    writeln!(output, "No prices found on the listing page.")?;
                }
                Ok(quotes) => writeln!(output, "{}", format_prices(&quotes))?,
                Err(e) => writeln!(output, "Failed to fetch cryptocurrency prices: {e}")?,
            }
        }
        Selection::LatestNews => {
            let topic = prompt_or_default(
                input,
                output,
                "Enter the news topic (e.g., technology, sports): ",
                &config.defaults.news_topic,
            )?;
            let news = NewsApi::new(config);
            let outcome = news
                .fetch_latest_news(&topic, &config.defaults.news_language)
                .await;

            writeln!(output, "\n--- Latest News on {topic} ---")?;
            match outcome {
                Ok(articles) if articles.is_empty() => {
                    writeln!(output, "No articles found for this topic.")?;
                }
                Ok(articles) => writeln!(output, "{}", format_articles(&articles))?,
                Err(e) => writeln!(output, "Failed to fetch news: {e}")?,
            }
        }
        Selection::WeatherReport => {
            let location = prompt_or_default(
                input,
                output,
                "Enter the location for weather (e.g., Addis Ababa): ",
                &config.defaults.weather_location,
            )?;
            let weather = OpenWeather::new(config);
            let outcome = weather.fetch_latest_weather(&location).await;

            writeln!(output, "\n--- Weather Report for {location} ---")?;
            match outcome {
                Ok(report) => writeln!(output, "{}", format_weather(&report))?,
                Err(e) => writeln!(output, "Failed to fetch the weather report: {e}")?,
            }
        }
        Selection::OutOfRange => {
            writeln!(output, "Invalid option. Please select 1, 2, or 3.")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_shell(input: &str) -> String {
        let config = AppConfig::default();
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut written: Vec<u8> = Vec::new();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime
            .block_on(run_with(&config, &mut reader, &mut written))
            .unwrap();

        String::from_utf8(written).unwrap()
    }

    #[test]
    fn test_parse_selection_maps_menu_numbers() {
        assert_eq!(parse_selection("1"), Some(Selection::CryptoPrices));
        assert_eq!(parse_selection(" 2 \n"), Some(Selection::LatestNews));
        assert_eq!(parse_selection("3"), Some(Selection::WeatherReport));
        assert_eq!(parse_selection("9"), Some(Selection::OutOfRange));
        assert_eq!(parse_selection("0"), Some(Selection::OutOfRange));
        assert_eq!(parse_selection("x"), None);
        assert_eq!(parse_selection(""), None);
    }

    #[test]
    fn test_non_integer_input_ends_the_interaction() {
        let output = run_shell("x\n");

        assert!(output.contains("Invalid input. Please enter a number between 1 and 3."));
        assert!(!output.contains("---"));
    }

    #[test]
    fn test_out_of_range_selection_prints_invalid_option() {
        let output = run_shell("9\n");

        assert!(output.contains("Invalid option. Please select 1, 2, or 3."));
        assert!(!output.contains("---"));
    }

    #[test]
    fn test_prompt_falls_back_on_blank_entry() {
        let mut reader = Cursor::new(b"\n".to_vec());
        let mut written: Vec<u8> = Vec::new();

        let value = prompt_or_default(&mut reader, &mut written, "Topic: ", "technology").unwrap();
        assert_eq!(value, "technology");
        assert_eq!(String::from_utf8(written).unwrap(), "Topic: ");
    }

    #[test]
    fn test_prompt_trims_entered_value() {
        let mut reader = Cursor::new(b"  sports \n".to_vec());
        let mut written: Vec<u8> = Vec::new();

        let value = prompt_or_default(&mut reader, &mut written, "Topic: ", "technology").unwrap();
        assert_eq!(value, "sports");
    }

    #[test]
    fn test_format_prices_one_line_per_quote() {
        let quotes = vec![
            PriceQuote {
                name: "Bitcoin".to_string(),
                price: "$97,412.18".to_string(),
            },
            PriceQuote {
                name: "Ethereum".to_string(),
                price: "$3,120.44".to_string(),
            },
        ];

        assert_eq!(
            format_prices(&quotes),
            "Bitcoin: $97,412.18\nEthereum: $3,120.44"
        );
    }

    #[test]
    fn test_format_articles_title_dash_source() {
        let article: NewsArticle = serde_json::from_value(serde_json::json!({
            "title": "Chip startup raises round",
            "source": {"name": "The Verge"}
        }))
        .unwrap();

        assert_eq!(
            format_articles(&[article]),
            "Chip startup raises round - The Verge"
        );
    }

    #[test]
    fn test_format_weather_pretty_prints_mapping() {
        let report: WeatherReport =
            serde_json::from_str(r#"{"main": {"temp": 21.5}, "name": "Addis Ababa"}"#).unwrap();

        let rendered = format_weather(&report);
        assert!(rendered.contains("\"temp\": 21.5"));
        assert!(rendered.starts_with('{'));
    }
}
