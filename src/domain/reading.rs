//! Weather reading and per-city statistics records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One stored `(city, temperature)` observation.
///
/// Materialized from a `weathers` row on read and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherReading {
    /// City name, matched exactly (case-sensitive).
    pub city: String,
    /// Recorded temperature.
    pub temperature: f64,
}

impl WeatherReading {
    /// Creates a reading for `city`.
    #[must_use]
    pub fn new(city: impl Into<String>, temperature: f64) -> Self {
        Self {
            city: city.into(),
            temperature,
        }
    }
}

/// Aggregate temperature statistics for a single city.
///
/// Only produced for cities that have at least one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherStats {
    /// City name.
    pub city: String,
    /// Lowest temperature, rounded to one decimal.
    pub min: f64,
    /// Highest temperature, rounded to one decimal.
    pub max: f64,
    /// Arithmetic mean, rounded to one decimal.
    pub mean: f64,
}

impl WeatherStats {
    /// Computes min, max and mean over `temperatures`.
    ///
    /// Returns `None` when `temperatures` is empty.
    #[must_use]
    pub fn from_temperatures(city: impl Into<String>, temperatures: &[f64]) -> Option<Self> {
        Some(Self {
            city: city.into(),
            min: super::calculate_stat(temperatures, super::Stat::Min)?,
            max: super::calculate_stat(temperatures, super::Stat::Max)?,
            mean: super::calculate_stat(temperatures, super::Stat::Mean)?,
        })
    }
}
