//! Persistence layer: read access to the `weathers` table.
//!
//! [`WeatherStore`] is the seam between request handling and storage.
//! [`PostgresWeatherStore`] queries PostgreSQL through `sqlx::PgPool`;
//! [`InMemoryWeatherStore`] serves a fixed set of readings.

pub mod memory;
pub mod postgres;

use std::collections::BTreeMap;

use async_trait::async_trait;

pub use memory::InMemoryWeatherStore;
pub use postgres::PostgresWeatherStore;

use crate::domain::WeatherReading;
use crate::error::ServiceError;

/// Read-only accessor for stored weather readings.
///
/// Every method returns fully materialized results. Failures surface as
/// [`ServiceError::Storage`]; nothing is retried.
#[async_trait]
pub trait WeatherStore: Send + Sync + std::fmt::Debug {
    /// Returns every reading in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on database failure.
    async fn fetch_all(&self) -> Result<Vec<WeatherReading>, ServiceError>;

    /// Returns the temperatures recorded for exactly `city`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on database failure.
    async fn fetch_temperatures_by_city(&self, city: &str) -> Result<Vec<f64>, ServiceError>;

    /// Returns every city's temperatures, keyed by city name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on database failure.
    async fn fetch_all_grouped_by_city(&self) -> Result<BTreeMap<String, Vec<f64>>, ServiceError> {
        Ok(group_by_city(self.fetch_all().await?))
    }

    /// Verifies the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// Groups readings by city, preserving storage order within each city.
#[must_use]
pub fn group_by_city<I>(readings: I) -> BTreeMap<String, Vec<f64>>
where
    I: IntoIterator<Item = WeatherReading>,
{
    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for reading in readings {
        grouped
            .entry(reading.city)
            .or_default()
            .push(reading.temperature);
    }
    grouped
}
