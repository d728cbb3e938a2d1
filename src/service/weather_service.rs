//! Weather service: read queries and per-city statistics.

use std::sync::Arc;

use crate::domain::{Stat, WeatherReading, WeatherStats, calculate_stat};
use crate::error::ServiceError;
use crate::persistence::WeatherStore;

/// Message returned when the `name` parameter is absent or empty.
pub const MISSING_CITY_MESSAGE: &str = "City parameter is required";

/// Message returned when a city has no stored readings.
pub const UNKNOWN_CITY_MESSAGE: &str = "No data found for the city";

/// Stateless coordinator over a [`WeatherStore`].
///
/// Holds no per-request state; every call issues its own queries.
#[derive(Debug, Clone)]
pub struct WeatherService {
    store: Arc<dyn WeatherStore>,
}

impl WeatherService {
    /// Creates a new `WeatherService` over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn WeatherStore>) -> Self {
        Self { store }
    }

    /// Returns every stored reading in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on store failure.
    pub async fn all_readings(&self) -> Result<Vec<WeatherReading>, ServiceError> {
        let readings = self.store.fetch_all().await?;
        tracing::debug!(count = readings.len(), "fetched all readings");
        Ok(readings)
    }

    /// Returns the temperatures recorded for `city` in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] if `city` is missing or
    /// empty, [`ServiceError::NotFound`] if it has no readings, and
    /// [`ServiceError::Storage`] on store failure.
    pub async fn city_temperatures(&self, city: Option<&str>) -> Result<Vec<f64>, ServiceError> {
        let city = city
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ServiceError::InvalidRequest(MISSING_CITY_MESSAGE.to_string()))?;

        let temperatures = self.store.fetch_temperatures_by_city(city).await?;
        if temperatures.is_empty() {
            return Err(ServiceError::NotFound(UNKNOWN_CITY_MESSAGE.to_string()));
        }

        tracing::debug!(city, count = temperatures.len(), "fetched city readings");
        Ok(temperatures)
    }

    /// Computes the statistic named `stat_name` over `city`'s readings.
    ///
    /// Unrecognized names yield the city's first reading.
    ///
    /// # Errors
    ///
    /// Same as [`WeatherService::city_temperatures`].
    pub async fn city_stat(
        &self,
        city: Option<&str>,
        stat_name: &str,
    ) -> Result<f64, ServiceError> {
        let temperatures = self.city_temperatures(city).await?;
        let stat = Stat::from_name(stat_name);
        calculate_stat(&temperatures, stat)
            .ok_or_else(|| ServiceError::NotFound(UNKNOWN_CITY_MESSAGE.to_string()))
    }

    /// Computes min, max and mean for every city, sorted by city name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on store failure.
    pub async fn stats(&self) -> Result<Vec<WeatherStats>, ServiceError> {
        let grouped = self.store.fetch_all_grouped_by_city().await?;

        let mut stats: Vec<WeatherStats> = grouped
            .iter()
            .filter_map(|(city, temps)| WeatherStats::from_temperatures(city.as_str(), temps))
            .collect();
        stats.sort_by(|a, b| a.city.cmp(&b.city));

        tracing::debug!(cities = stats.len(), "computed city stats");
        Ok(stats)
    }

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] if the ping fails.
    pub async fn ping(&self) -> Result<(), ServiceError> {
        self.store.ping().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryWeatherStore;

    fn make_service(readings: &[(&str, f64)]) -> WeatherService {
        let store: InMemoryWeatherStore = readings
            .iter()
            .map(|(city, t)| WeatherReading::new(*city, *t))
            .collect();
        WeatherService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn all_readings_of_empty_store_is_empty() {
        let service = make_service(&[]);
        let Ok(readings) = service.all_readings().await else {
            panic!("empty store must not fail");
        };
        assert!(readings.is_empty());
    }

    #[tokio::test]
    async fn missing_or_empty_city_is_invalid() {
        let service = make_service(&[("Paris", 1.0)]);
        let expected = Err(ServiceError::InvalidRequest(MISSING_CITY_MESSAGE.to_string()));
        assert_eq!(service.city_temperatures(None).await, expected);
        assert_eq!(service.city_temperatures(Some("")).await, expected);
    }

    #[tokio::test]
    async fn unknown_city_is_not_found() {
        let service = make_service(&[("Zurich", 1.0)]);
        assert_eq!(
            service.city_temperatures(Some("Paris")).await,
            Err(ServiceError::NotFound(UNKNOWN_CITY_MESSAGE.to_string()))
        );
        assert!(matches!(
            service.city_stat(Some("Paris"), "max").await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn city_stat_applies_calculator() {
        let service = make_service(&[("Paris", 10.04), ("Oslo", 0.0), ("Paris", 20.0)]);
        assert_eq!(service.city_stat(Some("Paris"), "min").await, Ok(10.0));
        assert_eq!(service.city_stat(Some("Paris"), "max").await, Ok(20.0));
        assert_eq!(service.city_stat(Some("Paris"), "mean").await, Ok(15.0));
        assert_eq!(service.city_stat(Some("Paris"), "median").await, Ok(10.0));
    }

    #[tokio::test]
    async fn stats_sorted_by_city() {
        let service = make_service(&[("Zurich", 5.0), ("Paris", 10.0), ("Paris", 20.0)]);
        let Ok(stats) = service.stats().await else {
            panic!("stats failed");
        };
        assert_eq!(
            stats,
            vec![
                WeatherStats {
                    city: "Paris".to_string(),
                    min: 10.0,
                    max: 20.0,
                    mean: 15.0,
                },
                WeatherStats {
                    city: "Zurich".to_string(),
                    min: 5.0,
                    max: 5.0,
                    mean: 5.0,
                },
            ]
        );
    }

    #[tokio::test]
    async fn storage_failures_propagate() {
        let service = WeatherService::new(Arc::new(InMemoryWeatherStore::unavailable("db down")));
        let expected = ServiceError::Storage("db down".to_string());
        assert_eq!(service.all_readings().await, Err(expected.clone()));
        assert_eq!(service.city_temperatures(Some("Paris")).await, Err(expected.clone()));
        assert_eq!(service.stats().await, Err(expected.clone()));
        assert_eq!(service.ping().await, Err(expected));
    }
}
