//! Service layer: request contracts over the weather store.
//!
//! [`WeatherService`] validates inputs, queries the injected
//! [`crate::persistence::WeatherStore`] and applies the stat calculator.

pub mod weather_service;

pub use weather_service::WeatherService;
