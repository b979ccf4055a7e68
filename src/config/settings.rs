//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SWAPI_TIMEOUT_SECONDS,
    DEFAULT_SWAPI_URL,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub swapi_url: String,
    pub swapi_timeout_secs: u64,
    pub enrichment_enabled: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("swapi_url", &self.swapi_url)
            .field("swapi_timeout_secs", &self.swapi_timeout_secs)
            .field("enrichment_enabled", &self.enrichment_enabled)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .or_else(|_| env::var("API_PORT"))
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            swapi_url: env::var("SWAPI_URL").unwrap_or_else(|_| DEFAULT_SWAPI_URL.to_string()),
            swapi_timeout_secs: env::var("SWAPI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SWAPI_TIMEOUT_SECONDS),
            enrichment_enabled: env::var("ENRICHMENT_ENABLED")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            swapi_url: DEFAULT_SWAPI_URL.to_string(),
            swapi_timeout_secs: DEFAULT_SWAPI_TIMEOUT_SECONDS,
            enrichment_enabled: true,
        }
    }
}

/// Anything but an explicit "off" value keeps the flag on.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
