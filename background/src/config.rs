use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("BIND_ADDR must be a socket address, got {0:?}")]
    InvalidBindAddr(String),
}

/// Background configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub notion_token: String,
    pub database_id: String,
    pub notion_api_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            notion_token: required("NOTION_TOKEN")?,
            database_id: required("DATABASE_ID")?,
            notion_api_url: lookup("NOTION_API_URL")
                .unwrap_or_else(|| DEFAULT_NOTION_API_URL.to_string()),
            bind_addr: bind_addr
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?,
        })
    }
}
