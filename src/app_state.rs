//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::WeatherStore;
use crate::service::WeatherService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather service for all read queries.
    pub weather_service: Arc<WeatherService>,
}

impl AppState {
    /// Builds the state around an explicitly constructed store.
    #[must_use]
    pub fn new(store: Arc<dyn WeatherStore>) -> Self {
        Self {
            weather_service: Arc::new(WeatherService::new(store)),
        }
    }
}
