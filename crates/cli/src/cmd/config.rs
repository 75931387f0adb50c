//! Configuration management command
//!
//! Provides CLI interface to view and edit Quip configuration.

use anyhow::{Context, Result};
use cli_lib::system_config;
use owo_colors::OwoColorize;

/// List all configuration values
pub async fn run_list() -> Result<()> {
    let config = system_config::load()?;
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    println!("{}", "Quip Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    println!("{}", "[search]".yellow());
    println!("  {} = {}", "endpoint".cyan(), config.search.endpoint);
    println!(
        "  {} = {} {}",
        "delay_ms".cyan(),
        config.search.delay_ms,
        format!("({}ms quiet period)", config.search.delay_ms).dimmed()
    );
    println!(
        "  {} = {} {}",
        "timeout_secs".cyan(),
        config.search.timeout_secs,
        format!("({}s)", config.search.timeout_secs).dimmed()
    );
    println!("  {} = {}", "user_agent".cyan(), config.search.user_agent);
    println!(
        "  {} = {}",
        "discard_stale_responses".cyan(),
        config.search.discard_stale_responses
    );

    println!("\n{}", "Valid Ranges:".bold());
    println!("  delay_ms: 0-10,000");
    println!("  timeout_secs: 1-300");

    Ok(())
}

/// Get a single configuration value
pub async fn run_get(key: &str) -> Result<()> {
    let config = system_config::load()?;

    let value = match key {
        "search.endpoint" => config.search.endpoint,
        "search.delay_ms" => config.search.delay_ms.to_string(),
        "search.timeout_secs" => config.search.timeout_secs.to_string(),
        "search.user_agent" => config.search.user_agent,
        "search.discard_stale_responses" => config.search.discard_stale_responses.to_string(),
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'quip config --list' to see available keys.",
            key
        ),
    };

    println!("{}", value);
    Ok(())
}

/// Set a configuration value
pub async fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = system_config::load()?;

    match key {
        "search.endpoint" => {
            config.search.endpoint = value.to_string();
        }
        "search.delay_ms" => {
            let val: u64 = value.parse()
                .context("Invalid value: must be a non-negative integer")?;
            config.search.delay_ms = val;
        }
        "search.timeout_secs" => {
            let val: u64 = value.parse()
                .context("Invalid value: must be a positive integer")?;
            config.search.timeout_secs = val;
        }
        "search.user_agent" => {
            config.search.user_agent = value.to_string();
        }
        "search.discard_stale_responses" => {
            let val: bool = value.parse()
                .context("Invalid value: must be 'true' or 'false'")?;
            config.search.discard_stale_responses = val;
        }
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'quip config --list' to see available keys.",
            key
        ),
    }

    // Validate before saving
    config.validate()
        .context("Invalid configuration value")?;

    system_config::save(&config)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), value);

    Ok(())
}

/// Show the config file path and optionally create it
pub async fn run_path(create: bool) -> Result<()> {
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    if create && !config_path.exists() {
        system_config::init_if_missing()?;
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", "File does not exist. Use --create to create it.".yellow());
    }

    Ok(())
}

/// Show example configuration
pub async fn run_example() -> Result<()> {
    let example = system_config::example_config();
    println!("{}", example);
    Ok(())
}
