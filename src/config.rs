//! Configuration management for `weatherwatch`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::WeatherWatchError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `weatherwatch` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherWatchConfig {
    /// Weather API configuration
    pub api: ApiConfig,
    /// Alert threshold configuration
    pub thresholds: ThresholdConfig,
    /// Output file configuration
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// WeatherAPI.com key
    pub key: String,
    /// Base URL for the forecast endpoint
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Number of forecast days to request
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    /// Request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_seconds: u32,
}

/// Alert thresholds, compared against the aggregation-pass averages.
///
/// Wind aggregation keeps the API's km/h, so the wind threshold is in km/h
/// even though alert bodies label the value "m/s".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Average max temperature threshold in degrees Celsius
    #[serde(default = "default_temp_threshold")]
    pub avg_temp_max_c: f64,
    /// Average wind speed threshold (km/h)
    #[serde(default = "default_wind_threshold")]
    pub avg_wind_speed: f64,
}

/// Output file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Append-only CSV file for parsed forecast days
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
    /// Append-only log of raw API response bodies
    #[serde(default = "default_raw_log_path")]
    pub raw_log_path: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_api_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_forecast_days() -> u32 {
    7
}

fn default_api_timeout() -> u32 {
    30
}

fn default_temp_threshold() -> f64 {
    25.0
}

fn default_wind_threshold() -> f64 {
    27.0
}

fn default_csv_path() -> String {
    "parsed_data.csv".to_string()
}

fn default_raw_log_path() -> String {
    "unparsed.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherWatchConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                key: String::new(),
                base_url: default_api_base_url(),
                forecast_days: default_forecast_days(),
                timeout_seconds: default_api_timeout(),
            },
            thresholds: ThresholdConfig {
                avg_temp_max_c: default_temp_threshold(),
                avg_wind_speed: default_wind_threshold(),
            },
            output: OutputConfig {
                csv_path: default_csv_path(),
                raw_log_path: default_raw_log_path(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        }
    }
}

impl WeatherWatchConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with WEATHERWATCH_ prefix
        builder = builder.add_source(
            Environment::with_prefix("WEATHERWATCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WeatherWatchConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weatherwatch").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the API key
    pub fn validate_api_key(&self) -> Result<()> {
        if self.api.key.is_empty() {
            return Err(WeatherWatchError::config(
                "Weather API key is missing. Set it in config.toml or via WEATHERWATCH_API__KEY.",
            )
            .into());
        }

        if self.api.key.len() < 8 {
            return Err(WeatherWatchError::config(
                "Weather API key appears to be invalid (too short). Please check your API key.",
            )
            .into());
        }

        if self.api.key.len() > 100 {
            return Err(WeatherWatchError::config(
                "Weather API key appears to be invalid (too long). Please check your API key.",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.api.timeout_seconds > 300 {
            return Err(
                WeatherWatchError::config("Weather API timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.api.forecast_days == 0 || self.api.forecast_days > 14 {
            return Err(
                WeatherWatchError::config("Forecast days must be between 1 and 14").into(),
            );
        }

        if self.thresholds.avg_temp_max_c < -100.0 || self.thresholds.avg_temp_max_c > 100.0 {
            return Err(WeatherWatchError::config(
                "Temperature threshold must be between -100 and 100 degrees Celsius",
            )
            .into());
        }

        if self.thresholds.avg_wind_speed < 0.0 {
            return Err(
                WeatherWatchError::config("Wind speed threshold cannot be negative").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherWatchError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(WeatherWatchError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.output.csv_path.is_empty() || self.output.raw_log_path.is_empty() {
            return Err(WeatherWatchError::config("Output file paths cannot be empty").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> WeatherWatchConfig {
        let mut config = WeatherWatchConfig::default();
        config.api.key = "valid_api_key_123".to_string();
        config
    }

    #[test]
    fn test_default_config() {
        let config = WeatherWatchConfig::default();
        assert_eq!(config.api.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.api.forecast_days, 7);
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.thresholds.avg_temp_max_c, 25.0);
        assert_eq!(config.thresholds.avg_wind_speed, 27.0);
        assert_eq!(config.output.csv_path, "parsed_data.csv");
        assert_eq!(config.output.raw_log_path, "unparsed.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validation_missing_api_key() {
        let config = WeatherWatchConfig::default();
        let result = config.validate_api_key();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key is missing"));
    }

    #[test]
    fn test_config_validation_valid_api_key() {
        let config = config_with_key();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = config_with_key();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = config_with_key();
        config.api.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));

        let mut config = config_with_key();
        config.api.forecast_days = 0;
        assert!(config.validate().is_err());

        let mut config = config_with_key();
        config.thresholds.avg_wind_speed = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = config_with_key();
        config.api.base_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base URL"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = WeatherWatchConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("weatherwatch"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
