//! OpenWeatherMap current-weather client.
//!
//! Fetches current conditions for a named location in metric units. The JSON
//! body is handed back untyped and untouched; the API's own error statuses
//! carry a `message` field that is surfaced as the failure reason.

use crate::config::AppConfig;
use crate::models::WeatherReport;
use crate::scrapers::{FetchError, http_client, upstream_error};
use crate::utils::truncate_for_log;
use tracing::{debug, error, info, instrument};

/// Client for the weather API.
pub struct OpenWeather {
    endpoint: String,
    api_key: Option<String>,
}

impl OpenWeather {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.endpoints.weather_api_url.clone(),
            api_key: config.weather_api_key.clone(),
        }
    }

    /// Fetch the current weather report for a location, verbatim.
    #[instrument(level = "info", skip_all, fields(%location))]
    pub async fn fetch_latest_weather(&self, location: &str) -> Result<WeatherReport, FetchError> {
        match self.try_fetch(location).await {
            Ok(report) => {
                info!(%location, keys = report.len(), "Fetched weather report");
                Ok(report)
            }
            Err(e) => {
                error!(error = %e, %location, "Failed to fetch weather report");
                Err(e)
            }
        }
    }

    async fn try_fetch(&self, location: &str) -> Result<WeatherReport, FetchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FetchError::Config("weather api key not configured".to_string()))?;

        let client = http_client()?;
        let response = client
            .get(&self.endpoint)
            .query(&[("q", location), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let report = weather_from_response(status, &body);
        if let Err(FetchError::Shape(_)) = &report {
            debug!(preview = %truncate_for_log(&body, 200), "Weather response body did not parse");
        }
        report
    }
}

/// Map a raw response to a report: success bodies pass through, failure
/// statuses become [`FetchError::Upstream`] with the upstream message.
fn weather_from_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<WeatherReport, FetchError> {
    if !status.is_success() {
        return Err(upstream_error(status, body));
    }
    Ok(serde_json::from_str(body)?)
}
