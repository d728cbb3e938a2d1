//! PostgreSQL implementation of the weather store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::WeatherStore;
use crate::config::ServiceConfig;
use crate::domain::WeatherReading;
use crate::error::ServiceError;

/// PostgreSQL-backed weather store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresWeatherStore {
    pool: PgPool,
}

impl PostgresWeatherStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool from `config` and checks it with one round trip.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the database cannot be reached.
    pub async fn connect(config: &ServiceConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_with(config.connect_options())
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            dbname = %config.dbname,
            "connected to database"
        );
        Ok(Self::new(pool))
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl WeatherStore for PostgresWeatherStore {
    async fn fetch_all(&self) -> Result<Vec<WeatherReading>, ServiceError> {
        // `::float8` accepts REAL and NUMERIC columns as well.
        let rows =
            sqlx::query_as::<_, (String, f64)>("SELECT city, temperature::float8 FROM weathers")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(city, temperature)| WeatherReading { city, temperature })
            .collect())
    }

    async fn fetch_temperatures_by_city(&self, city: &str) -> Result<Vec<f64>, ServiceError> {
        let temperatures = sqlx::query_scalar::<_, f64>(
            "SELECT temperature::float8 FROM weathers WHERE city = $1",
        )
        .bind(city)
        .fetch_all(&self.pool)
        .await?;

        Ok(temperatures)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
