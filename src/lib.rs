//! # weather-service
//!
//! Read-only REST service over a PostgreSQL `weathers` table of
//! `(city, temperature)` readings.
//!
//! Exposes every stored reading, per-city lookups with an optional
//! statistic (`min`, `max`, `mean`), and per-city aggregate statistics.
//! Statistics are rounded to one decimal place.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── WeatherService (service/)
//!     ├── Stat calculator (domain/)
//!     │
//!     └── WeatherStore (persistence/)
//!           └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
