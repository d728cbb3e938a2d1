//! Domain layer: weather records and the stat calculator.

pub mod reading;
pub mod stat;

pub use reading::{WeatherReading, WeatherStats};
pub use stat::{Stat, calculate_stat, round_one_decimal};
