//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Every option has a default so the
//! service starts against the stock `weather-db` container unconfigured.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServiceConfig::from_env`].
#[derive(Clone)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to (`LISTEN_HOST`).
    pub listen_host: IpAddr,

    /// TCP port the HTTP listener binds to (`LISTEN_PORT`).
    pub listen_port: u16,

    /// PostgreSQL host name (`DATABASE_HOST`).
    pub host: String,

    /// PostgreSQL port (`DATABASE_PORT`).
    pub port: u16,

    /// PostgreSQL role (`DATABASE_USER`).
    pub user: String,

    /// PostgreSQL password (`DATABASE_PASSWORD`).
    pub password: String,

    /// PostgreSQL database name (`DATABASE_NAME`).
    pub dbname: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` first to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_HOST` is set but is not an IP address.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Missing or unparsable numeric values fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_HOST` is set but is not an IP address.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_host: IpAddr = lookup("LISTEN_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse()?;

        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            listen_host,
            listen_port: parse_var(&lookup, "LISTEN_PORT", 8080),
            host: string("DATABASE_HOST", "weather-db"),
            port: parse_var(&lookup, "DATABASE_PORT", 5432),
            user: string("DATABASE_USER", "weatherman"),
            password: string("DATABASE_PASSWORD", "secr3t"),
            dbname: string("DATABASE_NAME", "weatherdb"),
            database_max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 10),
            database_min_connections: parse_var(&lookup, "DATABASE_MIN_CONNECTIONS", 0),
            database_connect_timeout_secs: parse_var(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 5),
        })
    }

    /// Socket address for the HTTP listener.
    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_host, self.listen_port)
    }

    /// PostgreSQL connection options. TLS is disabled.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::Disable)
    }

    /// Connection acquire timeout for the pool.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.database_connect_timeout_secs)
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("listen_host", &self.listen_host)
            .field("listen_port", &self.listen_port)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .field("database_max_connections", &self.database_max_connections)
            .field("database_min_connections", &self.database_min_connections)
            .field(
                "database_connect_timeout_secs",
                &self.database_connect_timeout_secs,
            )
            .finish()
    }
}

/// Parses `key` as `T`, returning `default` on missing or invalid values.
fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
