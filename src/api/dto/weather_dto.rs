//! Query parameters and response bodies for the weather endpoints.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

/// Query parameters for `GET /weathers/city`.
///
/// Built from the raw key/value pairs; when a key repeats, the first
/// occurrence wins and later ones are ignored.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// City name, matched exactly. Required.
    pub name: Option<String>,
    /// Statistic to compute: `min`, `max` or `mean`. Any other non-empty
    /// value returns the first reading.
    pub stat: Option<String>,
}

impl FromIterator<(String, String)> for CityQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "stat" => &mut query.stat,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl CityQuery {
    /// Requested statistic name, treating an empty value as absent.
    #[must_use]
    pub fn stat_name(&self) -> Option<&str> {
        self.stat.as_deref().filter(|s| !s.is_empty())
    }
}

/// Response body for `GET /weathers/city`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CityWeatherResponse {
    /// Raw temperatures in storage order (no `stat` given).
    Temperatures(Vec<f64>),
    /// Single statistic keyed by the requested name, e.g. `{"max": 21.5}`.
    Stat(BTreeMap<String, f64>),
}

impl CityWeatherResponse {
    /// Builds a single-entry statistic response.
    #[must_use]
    pub fn stat(name: &str, value: f64) -> Self {
        Self::Stat(BTreeMap::from([(name.to_string(), value)]))
    }
}
