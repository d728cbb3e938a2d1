//! Weather read endpoints: list, per-city lookup, per-city statistics.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CityQuery, CityWeatherResponse};
use crate::app_state::AppState;
use crate::domain::{WeatherReading, WeatherStats};
use crate::error::ServiceError;

/// `GET /weathers` — All stored readings.
///
/// # Errors
///
/// Returns [`ServiceError::Storage`] on database failure.
#[utoipa::path(
    get,
    path = "/weathers",
    tag = "Weathers",
    summary = "List all readings",
    description = "Returns every stored reading in storage order. An empty table yields `[]`.",
    responses(
        (status = 200, description = "All readings", body = Vec<WeatherReading>),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn list_weathers(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherReading>>, ServiceError> {
    let readings = state.weather_service.all_readings().await?;
    Ok(Json(readings))
}

/// `GET /weathers/city?name=&stat=` — Readings or one statistic for a city.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidRequest`] when `name` is missing,
/// [`ServiceError::NotFound`] when the city has no readings, and
/// [`ServiceError::Storage`] on database failure.
#[utoipa::path(
    get,
    path = "/weathers/city",
    tag = "Weathers",
    summary = "Readings for one city",
    description = "Without `stat`, returns the city's temperatures in storage order. With `stat`, returns `{\"<stat>\": value}` rounded to one decimal; unrecognized names return the first reading.",
    params(CityQuery),
    responses(
        (status = 200, description = "Temperatures or statistic", body = CityWeatherResponse),
        (status = 400, description = "Missing city name", body = String, content_type = "text/plain"),
        (status = 404, description = "No readings for the city", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn get_weather_by_city(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CityWeatherResponse>, ServiceError> {
    let query: CityQuery = pairs.into_iter().collect();
    let service = &state.weather_service;
    let city = query.name.as_deref();

    let response = match query.stat_name() {
        None => CityWeatherResponse::Temperatures(service.city_temperatures(city).await?),
        Some(stat) => CityWeatherResponse::stat(stat, service.city_stat(city, stat).await?),
    };

    Ok(Json(response))
}

/// `GET /weathers/stats` — Min, max and mean per city.
///
/// # Errors
///
/// Returns [`ServiceError::Storage`] on database failure.
#[utoipa::path(
    get,
    path = "/weathers/stats",
    tag = "Weathers",
    summary = "Per-city statistics",
    description = "Returns min, max and mean for every city with readings, sorted by city name ascending.",
    responses(
        (status = 200, description = "Per-city statistics", body = Vec<WeatherStats>),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn get_weather_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherStats>>, ServiceError> {
    let stats = state.weather_service.stats().await?;
    Ok(Json(stats))
}

/// Weather routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/weathers", get(list_weathers))
        .route("/weathers/city", get(get_weather_by_city))
        .route("/weathers/stats", get(get_weather_stats))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::api::build_app;
    use crate::app_state::AppState;
    use crate::persistence::InMemoryWeatherStore;

    use super::*;

    fn app(readings: &[(&str, f64)]) -> Router {
        let store: InMemoryWeatherStore = readings
            .iter()
            .map(|(city, t)| WeatherReading::new(*city, *t))
            .collect();
        build_app(AppState::new(Arc::new(store)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("invalid request");
        };
        let Ok(response) = app.oneshot(request).await;
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let Ok(bytes) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("unreadable body");
        };
        (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn list_on_empty_table_is_empty_array() {
        let (status, content_type, body) = get(app(&[]), "/weathers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn list_returns_storage_order() {
        let (status, _, body) = get(app(&[("Zurich", 3.5), ("Paris", 12.0)]), "/weathers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"[{"city":"Zurich","temperature":3.5},{"city":"Paris","temperature":12.0}]"#
        );
    }

    #[tokio::test]
    async fn city_without_name_is_bad_request() {
        let (status, content_type, body) = get(app(&[("Paris", 1.0)]), "/weathers/city").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert_eq!(body, "City parameter is required");

        let (status, _, _) = get(app(&[("Paris", 1.0)]), "/weathers/city?name=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_city_is_not_found() {
        let (status, _, body) = get(app(&[("Zurich", 1.0)]), "/weathers/city?name=Paris").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "No data found for the city");
    }

    #[tokio::test]
    async fn city_without_stat_returns_temperatures() {
        let rows = [("Paris", 10.0), ("Oslo", 1.0), ("Paris", 20.25)];
        let (status, _, body) = get(app(&rows), "/weathers/city?name=Paris").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[10.0,20.25]");

        let (_, _, body) = get(app(&rows), "/weathers/city?name=Paris&stat=").await;
        assert_eq!(body, "[10.0,20.25]");
    }

    #[tokio::test]
    async fn city_with_stat_returns_keyed_value() {
        let rows = [("Paris", 10.0), ("Paris", 20.25)];
        let (status, content_type, body) =
            get(app(&rows), "/weathers/city?name=Paris&stat=mean").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, r#"{"mean":15.1}"#);

        let (_, _, body) = get(app(&rows), "/weathers/city?name=Paris&stat=median").await;
        assert_eq!(body, r#"{"median":10.0}"#);
    }

    #[tokio::test]
    async fn repeated_parameters_use_first_value() {
        let rows = [("Paris", 1.0), ("Oslo", 5.0)];
        let (status, _, body) = get(app(&rows), "/weathers/city?name=Paris&name=Oslo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[1.0]");

        let (status, _, body) =
            get(app(&rows), "/weathers/city?name=Paris&stat=max&stat=min").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"max":1.0}"#);
    }

    #[tokio::test]
    async fn stats_sorted_by_city() {
        let rows = [("Zurich", 4.0), ("Paris", 10.0), ("Paris", 20.0)];
        let (status, _, body) = get(app(&rows), "/weathers/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            concat!(
                r#"[{"city":"Paris","min":10.0,"max":20.0,"mean":15.0},"#,
                r#"{"city":"Zurich","min":4.0,"max":4.0,"mean":4.0}]"#
            )
        );
    }

    #[tokio::test]
    async fn storage_failure_is_internal_error_with_raw_text() {
        let app = build_app(AppState::new(Arc::new(InMemoryWeatherStore::unavailable(
            "pool timed out while waiting for an open connection",
        ))));
        for uri in ["/weathers", "/weathers/city?name=Paris", "/weathers/stats"] {
            let (status, _, body) = get(app.clone(), uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body, "pool timed out while waiting for an open connection");
        }
    }
}
