//! In-memory weather store.
//!
//! Serves a fixed, ordered set of readings with the same semantics as the
//! PostgreSQL store. Backs the unit and integration tests.

use async_trait::async_trait;

use super::WeatherStore;
use crate::domain::WeatherReading;
use crate::error::ServiceError;

/// Weather store backed by a `Vec` in storage order.
///
/// An unavailable store fails every call with [`ServiceError::Storage`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryWeatherStore {
    readings: Vec<WeatherReading>,
    failure: Option<String>,
}

impl InMemoryWeatherStore {
    /// Creates a store holding `readings` in the given order.
    #[must_use]
    pub fn new(readings: Vec<WeatherReading>) -> Self {
        Self {
            readings,
            failure: None,
        }
    }

    /// Creates a store whose every call fails with `message`.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            readings: Vec::new(),
            failure: Some(message.into()),
        }
    }

    fn check(&self) -> Result<(), ServiceError> {
        match &self.failure {
            Some(msg) => Err(ServiceError::Storage(msg.clone())),
            None => Ok(()),
        }
    }
}

impl FromIterator<WeatherReading> for InMemoryWeatherStore {
    fn from_iter<I: IntoIterator<Item = WeatherReading>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl WeatherStore for InMemoryWeatherStore {
    async fn fetch_all(&self) -> Result<Vec<WeatherReading>, ServiceError> {
        self.check()?;
        Ok(self.readings.clone())
    }

    async fn fetch_temperatures_by_city(&self, city: &str) -> Result<Vec<f64>, ServiceError> {
        self.check()?;
        Ok(self
            .readings
            .iter()
            .filter(|r| r.city == city)
            .map(|r| r.temperature)
            .collect())
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        self.check()
    }
}
