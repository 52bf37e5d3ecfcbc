//! CoinMarketCap listing page scraper.
//!
//! Scrapes the ranked asset table on the CoinMarketCap front page. The page
//! renders its top assets as table rows, with the name link in the third
//! column and the price link in the fourth. Extraction is position-based and
//! therefore brittle to upstream redesigns; when the layout shifts, the fetch
//! degrades to a failed or empty result rather than guessing.

use crate::config::AppConfig;
use crate::models::PriceQuote;
use crate::scrapers::{FetchError, TOP_N, http_client};
use crate::utils::truncate_for_log;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error, info, instrument};

/// Scraper for the ranked asset listing.
pub struct CoinMarketCap {
    listing_url: String,
}

impl CoinMarketCap {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            listing_url: config.endpoints.market_listing_url.clone(),
        }
    }

    /// Fetch the top-ranked asset quotes from the listing page.
    ///
    /// # Returns
    ///
    /// Up to [`TOP_N`] quotes in listing order. The header row carries no
    /// `td` cells and drops out, so a page whose first rows include it
    /// yields fewer than [`TOP_N`] quotes.
    #[instrument(level = "info", skip_all)]
    pub async fn fetch_top_asset_prices(&self) -> Result<Vec<PriceQuote>, FetchError> {
        match self.try_fetch().await {
            Ok(quotes) => {
                info!(count = quotes.len(), "Fetched crypto prices");
                Ok(quotes)
            }
            Err(e) => {
                error!(error = %e, url = %self.listing_url, "Failed to fetch crypto prices");
                Err(e)
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<PriceQuote>, FetchError> {
        let client = http_client()?;
        let html = client.get(&self.listing_url).send().await?.text().await?;

        match parse_listing(&html) {
            Ok(quotes) => Ok(quotes),
            Err(e) => {
                debug!(preview = %truncate_for_log(&html, 200), "Listing markup did not parse");
                Err(e)
            }
        }
    }
}

/// Extract quotes from the first [`TOP_N`] table rows of the listing markup.
///
/// Rows with no cells are skipped; a row with cells but fewer than four of
/// them fails the whole parse, since the column positions can no longer be
/// trusted.
fn parse_listing(html: &str) -> Result<Vec<PriceQuote>, FetchError> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();
    let link_selector = Selector::parse("a").unwrap();
    let mut quotes = Vec::new();

    for row in document.select(&row_selector).take(TOP_N) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.is_empty() {
            continue;
        }

        let (name_cell, price_cell) = match (cells.get(2), cells.get(3)) {
            (Some(name), Some(price)) => (*name, *price),
            _ => {
                return Err(FetchError::Shape(format!(
                    "listing row has {} cells, expected at least 4",
                    cells.len()
                )));
            }
        };

        quotes.push(PriceQuote {
            name: link_text(name_cell, &link_selector),
            price: link_text(price_cell, &link_selector),
        });
    }

    Ok(quotes)
}

/// Text of the first link inside a cell, or `"N/A"` when there is none.
fn link_text(cell: ElementRef, link_selector: &Selector) -> String {
    cell.select(link_selector)
        .next()
        .map(|link| link.text().collect::<String>())
        .unwrap_or_else(|| "N/A".to_string())
}
