//! Interactive forecast watcher CLI
//!
//! Reads a city and country code, makes one forecast request, then displays,
//! persists, aggregates, and alerts on the result.

use std::io::{self, BufRead, Write};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use weatherwatch::models::{ForecastDay, ForecastResponse};
use weatherwatch::notify::{Notifier, ZenityNotifier};
use weatherwatch::storage::{CsvSink, RawLog};
use weatherwatch::{WeatherClient, WeatherWatchConfig, aggregate, alerts, api, notify, report};

/// Longest accepted city name
const CITY_MAX_CHARS: usize = 99;
/// Country codes are two letters
const COUNTRY_CODE_MAX_CHARS: usize = 2;

fn main() {
    let config = match WeatherWatchConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}");
            return;
        }
    };

    init_tracing(&config.logging.level);

    if let Err(e) = run(&config, &ZenityNotifier) {
        error!("{e}");
        eprintln!("{}", e.user_message());
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(config: &WeatherWatchConfig, notifier: &dyn Notifier) -> weatherwatch::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let city = prompt_trimmed(&mut input, "Enter city name: ", CITY_MAX_CHARS)?;
    let country_code = prompt_trimmed(&mut input, "Enter country code: ", COUNTRY_CODE_MAX_CHARS)?;

    let client = WeatherClient::new(&config.api)?;
    let raw = client.fetch_forecast(&city)?;

    let raw_log = RawLog::new(&config.output.raw_log_path);
    match raw_log.append(&raw) {
        Ok(()) => info!("Raw JSON data saved to {}", config.output.raw_log_path),
        Err(e) => warn!("Could not save raw response: {e}"),
    }

    let response = api::parse_forecast(&raw)?;

    let answer = prompt_trimmed(&mut input, "Do you want to see the forecast? (y/n): ", 1)?;
    if !answer.eq_ignore_ascii_case("y") {
        println!("Forecast display skipped.");
        return Ok(());
    }

    println!("Displaying forecast...");
    display_forecast(config, notifier, &city, &country_code, &response);

    Ok(())
}

/// Display each day, persist it, then run the aggregation pass and alerting
fn display_forecast(
    config: &WeatherWatchConfig,
    notifier: &dyn Notifier,
    city: &str,
    country_code: &str,
    response: &ForecastResponse,
) {
    let days = response.forecast_days();
    let sink = CsvSink::new(&config.output.csv_path);

    for entry in days {
        match ForecastDay::from_api(entry) {
            Ok(day) => {
                println!("{}", report::day_details(city, country_code, &day));
                if let Err(e) = sink.append_day(city, country_code, &day) {
                    warn!("Could not append to {}: {e}", config.output.csv_path);
                }
            }
            Err(e) => warn!("Skipping forecast day: {e}"),
        }
    }

    let (stats, samples) = aggregate::aggregate_forecast(days, days.len());
    for (index, sample) in &samples {
        println!("{}", report::aggregation_line(*index, sample));
    }

    match stats.finalize() {
        None => warn!("No days to calculate averages."),
        Some(averages) => {
            print!("{}", report::summary(&stats, &averages));
            for alert in alerts::evaluate(&averages, &config.thresholds) {
                notify::dispatch(notifier, &alert);
            }
        }
    }
}

/// Show a prompt and read one line, trimmed and truncated to `max_chars`
fn prompt_trimmed(input: &mut impl BufRead, label: &str, max_chars: usize) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().chars().take(max_chars).collect())
}
