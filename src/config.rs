use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("invalid listen address {0}")]
    InvalidAddr(String),
}

/// Server settings. Activity data is never configured, only where and how
/// the service listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_with_port(self.port)
    }

    /// Next port up, used when the configured one is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_with_port(self.port.saturating_add(1))
    }

    fn addr_with_port(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, port);
        raw.parse().map_err(|_| ConfigError::InvalidAddr(raw))
    }
}
