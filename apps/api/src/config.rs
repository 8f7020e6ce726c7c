//! Runtime configuration loaded from the environment (and an optional `.env`).

use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Reads configuration from process environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            tracing::debug!("no .env file found, using process environment");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is assembled from
    /// `HOST`, `DB_PORT`, `DB_USERNAME`, `DB_PASSWORD` and `DB_NAME`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                let host = lookup("HOST").unwrap_or_else(|| "localhost".to_string());
                let port: u16 = parse_or(&lookup, "DB_PORT", 5432)?;
                let user = required(&lookup, "DB_USERNAME")?;
                let password = required(&lookup, "DB_PASSWORD")?;
                let name = required(&lookup, "DB_NAME")?;
                format!(
                    "postgres://{}:{}@{}:{}/{}?sslmode=disable",
                    user, password, host, port, name
                )
            }
        };

        Ok(Self {
            database_url,
            server_port: parse_or(&lookup, "SERVER_PORT", 9090)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?),
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
