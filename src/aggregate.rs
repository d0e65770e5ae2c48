//! Aggregation pass over the forecast window
//!
//! Folds the raw per-day values into running sums and derives the window
//! averages. Wind speeds stay in the API's km/h here; only per-day display
//! converts to m/s.

use crate::models::api::{ApiDay, ApiForecastDay};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The values one day contributes to the aggregation pass.
///
/// Absent fields contribute 0 rather than aborting the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySample {
    /// Maximum temperature in Celsius
    pub max_temp_c: f64,
    /// Minimum temperature in Celsius
    pub min_temp_c: f64,
    /// Maximum wind speed in km/h, unconverted
    pub wind_kph: f64,
    /// Average humidity percentage
    pub humidity_pct: i64,
}

impl DaySample {
    /// Pull aggregation inputs out of one raw day object
    #[must_use]
    pub fn from_day(day: &ApiDay) -> Self {
        Self {
            max_temp_c: day.maxtemp_c.unwrap_or(0.0),
            min_temp_c: day.mintemp_c.unwrap_or(0.0),
            wind_kph: day.maxwind_kph.unwrap_or(0.0),
            humidity_pct: day.avghumidity.unwrap_or(0.0) as i64,
        }
    }
}

/// Running sums for one aggregation pass.
///
/// `count` is the expected length of the day window and is fixed at
/// construction; entries missing from the source shrink the sums but not
/// the divisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of days the window covers
    pub count: usize,
    /// Sum of daily maximum temperatures (°C)
    pub sum_temp_max: f64,
    /// Sum of daily minimum temperatures (°C)
    pub sum_temp_min: f64,
    /// Sum of daily maximum wind speeds (km/h)
    pub sum_wind_kph: f64,
    /// Sum of daily humidity percentages
    pub sum_humidity: i64,
}

/// Window averages derived from [`AggregateStats`].
///
/// Must not exist for an empty window; see [`AggregateStats::finalize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Averages {
    /// Average of daily maximum temperatures (°C)
    pub temp_max_c: f64,
    /// Average of daily minimum temperatures (°C)
    pub temp_min_c: f64,
    /// Average of daily maximum wind speeds (km/h)
    pub wind_kph: f64,
    /// Average humidity percentage
    pub humidity_pct: f64,
}

impl AggregateStats {
    /// Start a pass over a window of `days_count` days
    #[must_use]
    pub fn new(days_count: usize) -> Self {
        Self {
            count: days_count,
            sum_temp_max: 0.0,
            sum_temp_min: 0.0,
            sum_wind_kph: 0.0,
            sum_humidity: 0,
        }
    }

    /// Fold one day's sample into the running sums
    pub fn record(&mut self, sample: &DaySample) {
        self.sum_temp_max += sample.max_temp_c;
        self.sum_temp_min += sample.min_temp_c;
        self.sum_wind_kph += sample.wind_kph;
        self.sum_humidity += sample.humidity_pct;
    }

    /// Derive the window averages, or `None` for an empty window
    #[must_use]
    pub fn finalize(&self) -> Option<Averages> {
        if self.count == 0 {
            return None;
        }

        let divisor = self.count as f64;
        Some(Averages {
            temp_max_c: self.sum_temp_max / divisor,
            temp_min_c: self.sum_temp_min / divisor,
            wind_kph: self.sum_wind_kph / divisor,
            humidity_pct: self.sum_humidity as f64 / divisor,
        })
    }
}

/// Run one aggregation pass over the first `days_count` forecast entries.
///
/// An index past the end of the source, or an entry with no day object,
/// is reported and contributes nothing. Returns the stats together with
/// the recorded samples (paired with their day index) for reporting.
pub fn aggregate_forecast(
    days: &[ApiForecastDay],
    days_count: usize,
) -> (AggregateStats, Vec<(usize, DaySample)>) {
    let mut stats = AggregateStats::new(days_count);
    let mut samples = Vec::with_capacity(days_count);

    for i in 0..days_count {
        let Some(entry) = days.get(i) else {
            warn!("Day data not found for day {}", i + 1);
            continue;
        };
        let Some(day) = entry.day.as_ref() else {
            warn!("Day data not found for day {}", i + 1);
            continue;
        };

        let sample = DaySample::from_day(day);
        stats.record(&sample);
        samples.push((i, sample));
    }

    (stats, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::api::ApiCondition;

    fn entry(max_temp: f64, min_temp: f64, wind: f64, humidity: f64) -> ApiForecastDay {
        ApiForecastDay {
            date: Some("2026-08-05".to_string()),
            day: Some(ApiDay {
                maxtemp_c: Some(max_temp),
                mintemp_c: Some(min_temp),
                avgtemp_c: Some((max_temp + min_temp) / 2.0),
                avghumidity: Some(humidity),
                maxwind_kph: Some(wind),
                condition: Some(ApiCondition {
                    text: Some("Sunny".to_string()),
                }),
            }),
        }
    }

    #[test]
    fn test_averages_are_sums_over_count() {
        let days = vec![
            entry(20.0, 10.0, 10.0, 60.0),
            entry(30.0, 14.0, 20.0, 70.0),
            entry(24.0, 12.0, 25.0, 80.0),
        ];

        let (stats, samples) = aggregate_forecast(&days, 3);
        assert_eq!(samples.len(), 3);
        assert_eq!(stats.sum_temp_max, 74.0);
        assert_eq!(stats.sum_temp_min, 36.0);
        assert_eq!(stats.sum_wind_kph, 55.0);
        assert_eq!(stats.sum_humidity, 210);

        let averages = stats.finalize().unwrap();
        assert!((averages.temp_max_c - 74.0 / 3.0).abs() < 1e-9);
        assert!((averages.temp_min_c - 12.0).abs() < 1e-9);
        assert!((averages.wind_kph - 55.0 / 3.0).abs() < 1e-9);
        assert!((averages.humidity_pct - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_window_produces_no_averages() {
        let (stats, samples) = aggregate_forecast(&[], 0);
        assert!(samples.is_empty());
        assert!(stats.finalize().is_none());
    }

    #[test]
    fn test_missing_humidity_contributes_zero() {
        let mut days = vec![entry(20.0, 10.0, 10.0, 60.0), entry(30.0, 14.0, 20.0, 70.0)];
        days[1].day.as_mut().unwrap().avghumidity = None;

        let (stats, samples) = aggregate_forecast(&days, 2);
        assert_eq!(samples.len(), 2);
        assert_eq!(stats.sum_humidity, 60);

        let averages = stats.finalize().unwrap();
        assert!((averages.humidity_pct - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_source_skips_index_but_keeps_divisor() {
        let days = vec![entry(20.0, 10.0, 10.0, 60.0)];

        let (stats, samples) = aggregate_forecast(&days, 2);
        assert_eq!(samples.len(), 1);
        assert_eq!(stats.count, 2);

        let averages = stats.finalize().unwrap();
        assert!((averages.temp_max_c - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_entry_without_day_object_is_skipped() {
        let days = vec![
            entry(20.0, 10.0, 10.0, 60.0),
            ApiForecastDay {
                date: Some("2026-08-06".to_string()),
                day: None,
            },
        ];

        let (stats, samples) = aggregate_forecast(&days, 2);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].0, 0);
        assert_eq!(stats.sum_temp_max, 20.0);
    }
}
