//! WeatherAPI.com response structures
//!
//! Every leaf is optional; absence of a field is represented in the types.

use serde::Deserialize;

/// Forecast response from WeatherAPI.com (`/v1/forecast.json`)
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub forecast: Option<ApiForecast>,
}

/// The `forecast` subtree holding the day list
#[derive(Debug, Deserialize)]
pub struct ApiForecast {
    #[serde(default)]
    pub forecastday: Vec<ApiForecastDay>,
}

/// One entry of `forecast.forecastday`
#[derive(Debug, Deserialize)]
pub struct ApiForecastDay {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: Option<String>,
    /// Daily summary values
    pub day: Option<ApiDay>,
}

/// Daily summary values under `forecastday[i].day`
#[derive(Debug, Deserialize)]
pub struct ApiDay {
    pub maxtemp_c: Option<f64>,
    pub mintemp_c: Option<f64>,
    pub avgtemp_c: Option<f64>,
    pub avghumidity: Option<f64>,
    pub maxwind_kph: Option<f64>,
    pub condition: Option<ApiCondition>,
}

/// Weather condition description under `day.condition`
#[derive(Debug, Deserialize)]
pub struct ApiCondition {
    pub text: Option<String>,
}

impl ForecastResponse {
    /// The forecast-day list, empty when the `forecast` subtree is absent
    #[must_use]
    pub fn forecast_days(&self) -> &[ApiForecastDay] {
        self.forecast
            .as_ref()
            .map(|f| f.forecastday.as_slice())
            .unwrap_or_default()
    }
}
