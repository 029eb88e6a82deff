//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON backing file holding the item collection
    pub data_path: PathBuf,
    /// HTTP server port
    pub server_port: u16,
    /// Response cache TTL in seconds
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_PATH` - Backing file path (default: data/items.json)
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `CACHE_TTL_SECS` - Response cache TTL in seconds (default: 300)
    pub fn from_env() -> Self {
        Self {
            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/items.json")),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/items.json"),
            server_port: 3001,
            cache_ttl_secs: 300,
        }
    }
}
