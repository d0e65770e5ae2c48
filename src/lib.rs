//! `weatherwatch` - Interactive weather forecast watcher
//!
//! This library provides the core functionality for fetching a multi-day
//! forecast, aggregating it into window statistics, and raising desktop
//! alerts when averaged metrics cross their thresholds.

pub mod aggregate;
pub mod alerts;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod report;
pub mod storage;

// Re-export core types for public API
pub use aggregate::{AggregateStats, Averages, DaySample};
pub use alerts::AlertMessage;
pub use api::WeatherClient;
pub use config::WeatherWatchConfig;
pub use error::WeatherWatchError;
pub use models::{ForecastDay, ForecastResponse};
pub use notify::{Notifier, ZenityNotifier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherWatchError>;
