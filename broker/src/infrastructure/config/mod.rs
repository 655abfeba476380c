//! Configuration loading for the broker service
//!
//! Supports JSON configuration files for:
//! - Server address
//! - Bearer token secret
//! - I/O executor sizing
//! - Watchlist limits
//! - Listed market symbols

use crate::domain::Symbol;
use crate::infrastructure::executor::ExecutorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for the broker service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Bearer token validation
    #[serde(default)]
    pub auth: AuthConfig,

    /// Worker pool used by the deferred watchlist endpoints
    #[serde(default)]
    pub executor: ExecutorConfigDto,

    /// Watchlist validation limits
    #[serde(default)]
    pub watchlist: WatchListConfig,

    /// Symbols listed on the broker, each seeded with a quote
    #[serde(default = "default_markets")]
    pub markets: Vec<String>,
}

impl BrokerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Defaults overridden by `HOST`, `PORT` and `JWT_SECRET`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
    }

    /// Parse the configured market symbols
    pub fn market_symbols(&self) -> Result<Vec<Symbol>, ConfigError> {
        self.markets
            .iter()
            .map(|m| {
                Symbol::new(m.as_str())
                    .map_err(|e| ConfigError::InvalidSymbol(format!("{}: {}", m, e)))
            })
            .collect()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            executor: ExecutorConfigDto::default(),
            watchlist: WatchListConfig::default(),
            markets: default_markets(),
        }
    }
}

fn default_markets() -> Vec<String> {
    ["AAPL", "AMZN", "FB", "GOOG", "MSFT", "NFLX", "TSLA"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Bearer token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 secret shared with the token issuer
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
}

fn default_jwt_secret() -> String {
    "change-me-broker-secret".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
        }
    }
}

/// I/O executor configuration (DTO for JSON)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutorConfigDto {
    /// Worker threads; defaults to the number of CPUs (at least 2)
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default)]
    pub queue_capacity: Option<usize>,
}

impl ExecutorConfigDto {
    pub fn to_executor_config(&self) -> ExecutorConfig {
        let mut config = ExecutorConfig::default();
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if let Some(capacity) = self.queue_capacity {
            config = config.with_queue_capacity(capacity);
        }
        config
    }
}

/// Watchlist validation limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchListConfig {
    #[serde(default = "default_max_symbols")]
    pub max_symbols: usize,
}

fn default_max_symbols() -> usize {
    50
}

impl Default for WatchListConfig {
    fn default() -> Self {
        Self {
            max_symbols: default_max_symbols(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid market symbol {0}")]
    InvalidSymbol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = BrokerConfig::from_json("{}").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.watchlist.max_symbols, 50);
        assert_eq!(config.markets.len(), 7);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_sections() {
        let json = r#"{
            "server": { "port": 9000 },
            "executor": { "workers": 3 },
            "watchlist": { "max_symbols": 10 },
            "markets": ["aapl", "TSLA"]
        }"#;
        let config = BrokerConfig::from_json(json).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.executor.to_executor_config().workers, 3);
        assert_eq!(config.executor.to_executor_config().queue_capacity, 1024);
        assert_eq!(config.watchlist.max_symbols, 10);

        let symbols = config.market_symbols().unwrap();
        assert_eq!(symbols[0].as_str(), "aapl");
    }

    #[test]
    fn test_invalid_market_symbol() {
        let config = BrokerConfig::from_json(r#"{ "markets": ["TOOLONG"] }"#).unwrap();
        assert!(matches!(
            config.market_symbols(),
            Err(ConfigError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            BrokerConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            BrokerConfig::from_file("/nonexistent/broker.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
