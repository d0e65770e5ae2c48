//! Weather API client for WeatherAPI.com
//!
//! One blocking GET per run; the raw body is returned as text so it can be
//! logged before parsing.

use crate::Result;
use crate::config::ApiConfig;
use crate::error::WeatherWatchError;
use crate::models::ForecastResponse;
use std::time::Duration;

/// Client for the WeatherAPI.com forecast endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    forecast_days: u32,
}

impl WeatherClient {
    /// Create a client from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| WeatherWatchError::api(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.key.clone(),
            base_url: config.base_url.clone(),
            forecast_days: config.forecast_days,
        })
    }

    /// Create a client against a custom base URL (for testing)
    pub fn with_base_url(config: &ApiConfig, base_url: String) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.base_url = base_url;
        Ok(client)
    }

    /// Fetch the multi-day forecast for a city, returning the raw body.
    ///
    /// No retries; a transport or HTTP error ends the run.
    pub fn fetch_forecast(&self, city: &str) -> Result<String> {
        let url = format!(
            "{}/forecast.json?key={}&q={}&days={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(city),
            self.forecast_days
        );

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| WeatherWatchError::api(format!("Weather API request failed: {e}")))?;

        let response = response
            .error_for_status()
            .map_err(|e| WeatherWatchError::api(format!("Weather API error: {e}")))?;

        response
            .text()
            .map_err(|e| WeatherWatchError::api(format!("Failed to read response body: {e}")))
    }
}

/// Parse a raw response body into the typed forecast tree
pub fn parse_forecast(raw: &str) -> Result<ForecastResponse> {
    serde_json::from_str(raw)
        .map_err(|e| WeatherWatchError::parse(format!("JSON parsing error: {e}")))
}
