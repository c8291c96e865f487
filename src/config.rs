//! Configuration for the analytics core, loaded from environment variables
//! with sensible defaults so the pipeline runs without any setup.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Default trailing calendar window: two years of days.
pub const DEFAULT_TRAILING_WINDOW_DAYS: i64 = 730;

/// Default wealth baseline used when a CSV has no strategy/benchmark columns.
pub const DEFAULT_FALLBACK_BASELINE: f64 = 1000.0;

/// Payloads smaller than this are not plausible CSV data and trigger the
/// embedded demo fallback.
pub const DEFAULT_MIN_PLAUSIBLE_CSV_BYTES: usize = 50;

/// Analytics configuration.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub trailing_window_days: i64,
    pub fallback_baseline: f64,
    pub min_plausible_csv_bytes: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            trailing_window_days: DEFAULT_TRAILING_WINDOW_DAYS,
            fallback_baseline: DEFAULT_FALLBACK_BASELINE,
            min_plausible_csv_bytes: DEFAULT_MIN_PLAUSIBLE_CSV_BYTES,
        }
    }
}

impl AnalyticsConfig {
    /// Loads configuration from the environment, falling back to defaults
    /// for unset variables. Set variables that fail to parse are errors.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            trailing_window_days: parse_env("TRAILING_WINDOW_DAYS", DEFAULT_TRAILING_WINDOW_DAYS)?,
            fallback_baseline: parse_env("FALLBACK_BASELINE", DEFAULT_FALLBACK_BASELINE)?,
            min_plausible_csv_bytes: parse_env(
                "MIN_PLAUSIBLE_CSV_BYTES",
                DEFAULT_MIN_PLAUSIBLE_CSV_BYTES,
            )?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("invalid {}: {}", key, raw)),
        Err(_) => Ok(default),
    }
}
