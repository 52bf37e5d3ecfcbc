//! NewsAPI article search client.
//!
//! Queries the NewsAPI "everything" endpoint for the latest articles on a
//! topic. Articles are kept verbatim: the first [`TOP_N`] of whatever the
//! API returned, in its order, with every field passed through.

use crate::config::AppConfig;
use crate::models::NewsArticle;
use crate::scrapers::{FetchError, TOP_N, http_client, upstream_error};
use crate::utils::truncate_for_log;
use tracing::{debug, error, info, instrument};

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Option<Vec<NewsArticle>>,
}

/// Client for the news search API.
pub struct NewsApi {
    endpoint: String,
    api_key: Option<String>,
}

impl NewsApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.endpoints.news_api_url.clone(),
            api_key: config.news_api_key.clone(),
        }
    }

    /// Fetch the latest articles for a topic.
    ///
    /// An empty vector means the API genuinely had nothing for the topic;
    /// every failure mode comes back as an `Err` instead.
    #[instrument(level = "info", skip_all, fields(%topic, %language))]
    pub async fn fetch_latest_news(
        &self,
        topic: &str,
        language: &str,
    ) -> Result<Vec<NewsArticle>, FetchError> {
        match self.try_fetch(topic, language).await {
            Ok(articles) => {
                info!(count = articles.len(), %topic, "Fetched news articles");
                Ok(articles)
            }
            Err(e) => {
                error!(error = %e, %topic, "Failed to fetch news articles");
                Err(e)
            }
        }
    }

    async fn try_fetch(&self, topic: &str, language: &str) -> Result<Vec<NewsArticle>, FetchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FetchError::Config("news api key not configured".to_string()))?;

        let client = http_client()?;
        let response = client
            .get(&self.endpoint)
            .query(&[("q", topic), ("language", language), ("apiKey", api_key)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(upstream_error(status, &body));
        }

        match parse_search_body(&body) {
            Ok(articles) => Ok(articles),
            Err(e) => {
                debug!(preview = %truncate_for_log(&body, 200), "News response body did not parse");
                Err(e)
            }
        }
    }
}

/// Pull the first [`TOP_N`] articles out of a successful response body.
fn parse_search_body(body: &str) -> Result<Vec<NewsArticle>, FetchError> {
    let parsed: SearchResponse = serde_json::from_str(body)?;
    let articles = parsed
        .articles
        .ok_or_else(|| FetchError::Shape("response has no articles array".to_string()))?;

    Ok(articles.into_iter().take(TOP_N).collect())
}
