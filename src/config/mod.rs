//! Configuration module for the Donor Finder backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::errors::AppError;

/// Public placeholder directory the donors are derived from.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint returning the JSON array of users
    pub users_url: String,
    /// Pre-shared key for API authentication (auth disabled when unset)
    pub api_psk: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Upper bound on the user fetch; exceeding it counts as a failed fetch
    pub fetch_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let users_url =
            env::var("DONORS_USERS_URL").unwrap_or_else(|_| DEFAULT_USERS_URL.to_string());

        let api_psk = env::var("DONORS_API_PSK").ok().filter(|key| !key.is_empty());

        let bind_addr = env::var("DONORS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid DONORS_BIND_ADDR: {}", e)))?;

        let log_level = env::var("DONORS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let fetch_timeout = match env::var("DONORS_FETCH_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map(Duration::from_secs).map_err(|e| {
                AppError::Config(format!("Invalid DONORS_FETCH_TIMEOUT_SECS: {}", e))
            })?,
            Err(_) => Duration::from_secs(10),
        };

        Ok(Self {
            users_url,
            api_psk,
            bind_addr,
            log_level,
            fetch_timeout,
        })
    }
}
