//! Configuration Module
//!
//! Handles loading server, cache, database and logging settings from
//! environment variables. Loaded once at startup.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host the HTTP server binds to
    pub service_host: String,
    /// HTTP server port
    pub service_port: u16,
    /// TTL in seconds for cached car records
    pub cache_ttl_seconds: u64,
    /// Drop the cached record when it is deleted from the store
    pub cache_invalidate_on_delete: bool,
    /// sqlx connection string
    pub database_url: String,
    /// Maximum pooled database connections
    pub database_max_connections: u32,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVICE_HOST` - Bind host (default: 0.0.0.0)
    /// - `SERVICE_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 60)
    /// - `CACHE_INVALIDATE_ON_DELETE` - Invalidate cache on delete (default: false)
    /// - `DATABASE_URL` - Database connection string (default: sqlite://cars.db?mode=rwc)
    /// - `DATABASE_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `LOG_LEVEL` - Log level (default: info)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service_host: env::var("SERVICE_HOST").unwrap_or(defaults.service_host),
            service_port: parse_var("SERVICE_PORT").unwrap_or(defaults.service_port),
            cache_ttl_seconds: parse_var("CACHE_TTL_SECONDS")
                .unwrap_or(defaults.cache_ttl_seconds),
            cache_invalidate_on_delete: parse_var("CACHE_INVALIDATE_ON_DELETE")
                .unwrap_or(defaults.cache_invalidate_on_delete),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or(defaults.database_max_connections),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Address string the listener binds to, e.g. `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_host: "0.0.0.0".to_string(),
            service_port: 8080,
            cache_ttl_seconds: 60,
            cache_invalidate_on_delete: false,
            database_url: "sqlite://cars.db?mode=rwc".to_string(),
            database_max_connections: 5,
            log_level: "info".to_string(),
        }
    }
}
