//! Key tools configuration from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::puzzle_hash::Network;

/// Configuration for the key tools service and its logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyToolsConfig {
    /// Network used when encoding addresses without an explicit prefix
    pub network: Network,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for KeyToolsConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl KeyToolsConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `XCK_NETWORK`: `mainnet`/`xck` or `testnet`/`txck` (default: mainnet)
    /// - `XCK_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `XCK_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builder-style method to set the default network
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            network: lookup("XCK_NETWORK")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),

            log_level: lookup("XCK_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),

            json_logs: lookup("XCK_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
