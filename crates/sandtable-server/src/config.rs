//! Server configuration.

use std::env;
use std::time::Duration;

use sandtable_core::constants::{DEFAULT_BIND_ADDR, TICK_INTERVAL_MS};

/// Configuration for [`crate::Server`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the WebSocket listener binds to.
    pub bind_addr: String,
    /// Interval between periodic simulation ticks.
    pub tick_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `SANDTABLE_ADDR` and `SANDTABLE_TICK_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = env::var("SANDTABLE_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(ms) = env::var("SANDTABLE_TICK_MS") {
            match ms.parse::<u64>() {
                Ok(ms) if ms > 0 => config.tick_interval = Duration::from_millis(ms),
                _ => tracing::warn!("ignoring invalid SANDTABLE_TICK_MS value: {ms}"),
            }
        }
        config
    }
}
