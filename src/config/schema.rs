//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration of a client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// JSON-RPC endpoint (HTTP or HTTPS).
    pub rpc_url: String,

    /// Expected chain ID. Checked on connect when set.
    pub chain_id: Option<u64>,

    /// Block explorer base URL, used to format mined transactions.
    pub explorer_url: Option<String>,

    /// Simulate every transaction before sending it.
    pub safe_mode: bool,

    /// Maximum wait for a transaction receipt.
    pub confirmation_timeout_secs: u64,

    /// Interval between receipt polls.
    pub poll_interval_ms: u64,

    /// Address of the Disperse contract.
    pub disperse_address: Option<String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: None,
            explorer_url: None,
            safe_mode: false,
            confirmation_timeout_secs: 60,
            poll_interval_ms: 1000,
            disperse_address: None,
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
