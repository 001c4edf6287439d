//! Environment-backed server configuration.

use crate::error::config::ConfigError;

/// Runtime configuration read from environment variables at startup.
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `DATABASE_URL` is required; `HOST` defaults to `0.0.0.0` and `PORT`
    /// to `8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT", value))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
