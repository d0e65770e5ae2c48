//! Threshold alert engine
//!
//! Evaluates the aggregation-pass averages against the configured
//! thresholds. The wind comparison runs in km/h (the unit the aggregation
//! keeps) while the message body labels the value "m/s".

use crate::aggregate::Averages;
use crate::config::ThresholdConfig;

/// A single alert ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    /// Dialog title
    pub title: String,
    /// Dialog body text
    pub body: String,
}

/// Evaluate the window averages against both thresholds.
///
/// The checks are independent and strictly greater-than; zero, one, or two
/// alerts come back, temperature first.
#[must_use]
pub fn evaluate(averages: &Averages, thresholds: &ThresholdConfig) -> Vec<AlertMessage> {
    let mut alerts = Vec::new();

    if averages.temp_max_c > thresholds.avg_temp_max_c {
        alerts.push(AlertMessage {
            title: "Temperature Alert".to_string(),
            body: format!(
                "The average temperature has exceeded {:.2}°C. Current: {:.2}°C",
                thresholds.avg_temp_max_c, averages.temp_max_c
            ),
        });
    }

    if averages.wind_kph > thresholds.avg_wind_speed {
        alerts.push(AlertMessage {
            title: "Wind Speed Alert".to_string(),
            body: format!(
                "The average wind speed has exceeded {:.2} m/s. Current: {:.2} m/s",
                thresholds.avg_wind_speed, averages.wind_kph
            ),
        });
    }

    alerts
}
