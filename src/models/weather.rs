//! Normalized per-day forecast record and display methods

use crate::Result;
use crate::error::WeatherWatchError;
use crate::models::api::ApiForecastDay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Divisor for converting km/h wind speeds to m/s
const KPH_TO_MS: f64 = 3.6;

/// One day of forecast data, normalized for display and persistence
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ForecastDay {
    /// Calendar date of this forecast day
    pub date: NaiveDate,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Maximum temperature in Celsius
    pub temp_max_c: f64,
    /// Minimum temperature in Celsius
    pub temp_min_c: f64,
    /// Average ("feels like") temperature in Celsius
    pub temp_avg_c: f64,
    /// Average humidity percentage (0-100)
    pub humidity_pct: u8,
    /// Maximum wind speed in m/s, converted from the API's km/h
    pub wind_speed_ms: f64,
}

impl ForecastDay {
    /// Extract a normalized record from one raw forecast-day entry.
    ///
    /// Missing numeric fields default to 0. A missing or unparseable date,
    /// missing day object, or missing condition text is an error for this
    /// day only; callers skip the day with a warning.
    pub fn from_api(entry: &ApiForecastDay) -> Result<Self> {
        let date_str = entry
            .date
            .as_deref()
            .ok_or_else(|| WeatherWatchError::missing_field("date"))?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| WeatherWatchError::missing_field("date"))?;

        let day = entry
            .day
            .as_ref()
            .ok_or_else(|| WeatherWatchError::missing_field("day"))?;

        let description = day
            .condition
            .as_ref()
            .and_then(|c| c.text.clone())
            .ok_or_else(|| WeatherWatchError::missing_field("condition.text"))?;

        Ok(Self {
            date,
            description,
            temp_max_c: day.maxtemp_c.unwrap_or(0.0),
            temp_min_c: day.mintemp_c.unwrap_or(0.0),
            temp_avg_c: day.avgtemp_c.unwrap_or(0.0),
            humidity_pct: day.avghumidity.unwrap_or(0.0) as u8,
            wind_speed_ms: day.maxwind_kph.unwrap_or(0.0) / KPH_TO_MS,
        })
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(value: f64) -> String {
        format!("{value:.2}°C")
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.2} m/s", self.wind_speed_ms)
    }
}
