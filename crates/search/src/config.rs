//! Search configuration
//!
//! Loaded from the `[search]` table of the Quip config file. Every field has
//! a default, so a missing or partial table is valid.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public joke search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://icanhazdadjoke.com/search";

/// Quiet period before a search fires (ms)
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Allowed range for `delay_ms`
pub const DELAY_MS_RANGE: (u64, u64) = (0, 10_000);

/// Allowed range for `timeout_secs`
pub const TIMEOUT_SECS_RANGE: (u64, u64) = (1, 300);

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint URL (default: icanhazdadjoke)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Debounce delay in milliseconds (default: 500)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// HTTP request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Drop responses that arrive after a newer search fired (default: true)
    #[serde(default = "default_true")]
    pub discard_stale_responses: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            delay_ms: default_delay_ms(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            discard_stale_responses: true,
        }
    }
}

impl SearchConfig {
    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Empty { key: "search.endpoint" });
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::BadScheme(self.endpoint.clone()));
        }

        check_range("search.delay_ms", self.delay_ms, DELAY_MS_RANGE)?;
        check_range("search.timeout_secs", self.timeout_secs, TIMEOUT_SECS_RANGE)?;

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Empty { key: "search.user_agent" });
        }

        Ok(())
    }

    /// Debounce delay as a Duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn check_range(key: &'static str, value: u64, (min, max): (u64, u64)) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange { key, value, min, max });
    }
    Ok(())
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("quip/{} (https://github.com/yourusername/quip)", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}
