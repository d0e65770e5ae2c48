//! Display formatting for forecast days and the aggregation summary
//!
//! Pure string building; callers decide where the text goes.

use crate::aggregate::{AggregateStats, Averages, DaySample};
use crate::models::ForecastDay;
use std::fmt::Write;

/// Detail block for one forecast day
#[must_use]
pub fn day_details(city: &str, country_code: &str, day: &ForecastDay) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Date: {}", day.date.format("%Y-%m-%d"));
    let _ = writeln!(out, "City: {city}, Country Code: {country_code}");
    let _ = writeln!(out, "Weather: {}", day.description);
    let _ = writeln!(out, "Max Temperature: {:.2}°C", day.temp_max_c);
    let _ = writeln!(out, "Min Temperature: {:.2}°C", day.temp_min_c);
    let _ = writeln!(out, "Feels Like: {:.2}°C", day.temp_avg_c);
    let _ = writeln!(out, "Humidity: {}%", day.humidity_pct);
    let _ = writeln!(out, "Wind Speed: {:.2} m/s", day.wind_speed_ms);
    out
}

/// One line of the aggregation pass, wind still in km/h
#[must_use]
pub fn aggregation_line(index: usize, sample: &DaySample) -> String {
    format!(
        "Day {}: Max Temp = {:.2}, Min Temp = {:.2}, Wind Speed = {:.2} kph, Humidity = {}",
        index + 1,
        sample.max_temp_c,
        sample.min_temp_c,
        sample.wind_kph,
        sample.humidity_pct
    )
}

/// Summary banner with the four averages and the two raw sums
#[must_use]
pub fn summary(stats: &AggregateStats, averages: &Averages) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "=======================================");
    let _ = writeln!(out, "               AVERAGE WEATHER");
    let _ = writeln!(out, "=======================================");
    let _ = writeln!(
        out,
        "| {:<35} | {:.2} °C      |",
        "Average Max Temperature", averages.temp_max_c
    );
    let _ = writeln!(
        out,
        "| {:<35} | {:.2} °C      |",
        "Average Min Temperature", averages.temp_min_c
    );
    let _ = writeln!(
        out,
        "| {:<35} | {:.2} kph     |",
        "Average Wind Speed", averages.wind_kph
    );
    let _ = writeln!(
        out,
        "| {:<35} | {:.2} %      |",
        "Average Humidity", averages.humidity_pct
    );
    let _ = writeln!(out, "=======================================");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total Max Temp: {:.2}, Total Wind Speed: {:.2}",
        stats.sum_temp_max, stats.sum_wind_kph
    );
    out
}
