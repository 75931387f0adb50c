//! Quip configuration file
//!
//! Lives at `<config_dir>/quip/config.toml` (or wherever `QUIP_CONFIG`
//! points). A missing file means all defaults.

use anyhow::{Context, Result};
use search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "QUIP_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,
}

impl SystemConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        Ok(())
    }
}

/// Path of the config file
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("quip").join("config.toml"))
}

/// Load configuration from the default location
pub fn load() -> Result<SystemConfig> {
    match config_file_path() {
        Some(path) => load_from(&path),
        None => Ok(SystemConfig::default()),
    }
}

/// Load configuration from `path`, falling back to defaults if it does not exist
pub fn load_from(path: &Path) -> Result<SystemConfig> {
    if !path.exists() {
        return Ok(SystemConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: SystemConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    Ok(config)
}

/// Save configuration to the default location
pub fn save(config: &SystemConfig) -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    save_to(config, &path)
}

/// Save configuration to `path`, creating parent directories
pub fn save_to(config: &SystemConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    Ok(())
}

/// Write a default config file if none exists yet
pub fn init_if_missing() -> Result<PathBuf> {
    let path = config_file_path().context("Could not determine config file path")?;
    if !path.exists() {
        save_to(&SystemConfig::default(), &path)?;
    }
    Ok(path)
}

/// Annotated example configuration
pub fn example_config() -> String {
    let defaults = SearchConfig::default();
    format!(
        r#"# Quip configuration
# Location: <config_dir>/quip/config.toml (override with {env})

[search]
# Joke search endpoint
endpoint = "{endpoint}"

# Quiet period after the last keystroke before a search fires (0-10000 ms)
delay_ms = {delay_ms}

# HTTP request timeout (1-300 s)
timeout_secs = {timeout_secs}

# User-Agent header sent with every request
user_agent = "{user_agent}"

# Ignore responses that arrive after a newer search already fired
discard_stale_responses = {discard}
"#,
        env = CONFIG_ENV,
        endpoint = defaults.endpoint,
        delay_ms = defaults.delay_ms,
        timeout_secs = defaults.timeout_secs,
        user_agent = defaults.user_agent,
        discard = defaults.discard_stale_responses,
    )
}
