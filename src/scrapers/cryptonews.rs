//! CryptoNews headline scraper.
//!
//! Pulls the leading headlines from the CryptoNews front page, which renders
//! each story title as an `h4` element. Only the first [`TOP_N`] headlines
//! are kept, in document order.

use crate::config::AppConfig;
use crate::scrapers::{FetchError, TOP_N, http_client};
use scraper::{Html, Selector};
use tracing::{error, info, instrument};

/// Scraper for the crypto headline page.
pub struct CryptoNews {
    headlines_url: String,
}

impl CryptoNews {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            headlines_url: config.endpoints.crypto_headlines_url.clone(),
        }
    }

    /// Fetch the top crypto headlines, trimmed, in page order.
    #[instrument(level = "info", skip_all)]
    pub async fn fetch_headlines(&self) -> Result<Vec<String>, FetchError> {
        match self.try_fetch().await {
            Ok(headlines) => {
                info!(count = headlines.len(), "Fetched crypto headlines");
                Ok(headlines)
            }
            Err(e) => {
                error!(error = %e, url = %self.headlines_url, "Failed to fetch crypto headlines");
                Err(e)
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<String>, FetchError> {
        let client = http_client()?;
        let html = client.get(&self.headlines_url).send().await?.text().await?;
        Ok(parse_headlines(&html))
    }
}

fn parse_headlines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let headline_selector = Selector::parse("h4").unwrap();
    document
        .select(&headline_selector)
        .take(TOP_N)
        .map(|headline| headline.text().collect::<String>().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_five_headlines_in_order() {
        let html: String = (1..=7)
            .map(|i| format!("<h4>  Headline {i}  </h4>"))
            .collect();

        let headlines = parse_headlines(&html);
        assert_eq!(headlines.len(), 5);
        assert_eq!(headlines[0], "Headline 1");
        assert_eq!(headlines[4], "Headline 5");
    }

    #[test]
    fn test_headline_text_is_trimmed_and_flattened() {
        let html = "<h4>\n  Bitcoin <em>rallies</em> again\n</h4>";
        let headlines = parse_headlines(html);
        assert_eq!(headlines, vec!["Bitcoin rallies again".to_string()]);
    }

    #[test]
    fn test_page_without_headlines_is_empty() {
        assert!(parse_headlines("<html><body></body></html>").is_empty());
    }
}
