//! Error types and handling for `weatherwatch`

use thiserror::Error;

/// Main error type for the `weatherwatch` application
#[derive(Error, Debug)]
pub enum WeatherWatchError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather API transport errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Malformed response body
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// A required per-day field was absent from the response
    #[error("Missing field: {field}")]
    MissingField { field: String },

    /// Output file errors (CSV sink, raw-response log)
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherWatchError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new missing-field error
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherWatchError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            WeatherWatchError::Api { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            WeatherWatchError::Parse { .. } => {
                "The weather service returned an unreadable response.".to_string()
            }
            WeatherWatchError::MissingField { field } => {
                format!("Forecast data is incomplete: missing {field}")
            }
            WeatherWatchError::Storage { .. } => {
                "Could not write output files. Please check file permissions.".to_string()
            }
            WeatherWatchError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
