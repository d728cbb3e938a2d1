//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::CityWeatherResponse;
use super::handlers::{system, weather};
use crate::domain::{WeatherReading, WeatherStats};

/// Generated OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "weather-service",
        description = "Read-only access to stored weather readings and per-city statistics."
    ),
    paths(
        weather::list_weathers,
        weather::get_weather_by_city,
        weather::get_weather_stats,
        system::health_handler,
    ),
    components(schemas(
        WeatherReading,
        WeatherStats,
        CityWeatherResponse,
        system::HealthResponse,
    )),
    tags(
        (name = "Weathers", description = "Stored readings and statistics"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;
