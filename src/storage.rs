//! Append-only persistence for parsed forecast days and raw responses

use crate::Result;
use crate::error::WeatherWatchError;
use crate::models::ForecastDay;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column headers for the parsed-data CSV file
const CSV_HEADER: [&str; 9] = [
    "City",
    "Country Code",
    "Date",
    "Weather",
    "Max Temperature (°C)",
    "Min Temperature (°C)",
    "Feels Like (°C)",
    "Humidity (%)",
    "Wind Speed (m/s)",
];

/// Append-only CSV sink for parsed forecast days
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Create a sink writing to `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Append one forecast day, writing the header first if the file is empty
    pub fn append_day(&self, city: &str, country_code: &str, day: &ForecastDay) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let write_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            writer
                .write_record(CSV_HEADER)
                .map_err(|e| WeatherWatchError::storage(format!("CSV header write failed: {e}")))?;
        }

        let date = day.date.format("%Y-%m-%d").to_string();
        let temp_max = format!("{:.2}", day.temp_max_c);
        let temp_min = format!("{:.2}", day.temp_min_c);
        let feels_like = format!("{:.2}", day.temp_avg_c);
        let humidity = day.humidity_pct.to_string();
        let wind_speed = format!("{:.2}", day.wind_speed_ms);

        writer
            .write_record([
                city,
                country_code,
                &date,
                &day.description,
                &temp_max,
                &temp_min,
                &feels_like,
                &humidity,
                &wind_speed,
            ])
            .map_err(|e| WeatherWatchError::storage(format!("CSV row write failed: {e}")))?;

        writer
            .flush()
            .map_err(|e| WeatherWatchError::storage(format!("CSV flush failed: {e}")))?;

        Ok(())
    }

    /// Path this sink writes to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Append-only log of raw API response bodies, one blob per run
#[derive(Debug, Clone)]
pub struct RawLog {
    path: PathBuf,
}

impl RawLog {
    /// Create a log appending to `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Append one raw response body
    pub fn append(&self, raw: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{raw}")?;
        Ok(())
    }
}
