//! Data models for the weatherwatch application
//!
//! This module contains the core domain models organized by concern:
//! - Api: the WeatherAPI.com response tree as it arrives on the wire
//! - Weather: the normalized per-day forecast record used internally

pub mod api;
pub mod weather;

// Re-export all public types for convenient access
pub use api::{ApiCondition, ApiDay, ApiForecastDay, ForecastResponse};
pub use weather::ForecastDay;
