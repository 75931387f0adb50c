//! One-shot joke search

use anyhow::{Context, Result};
use cli_lib::system_config;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use search::{JokeClient, JokeSource};
use std::time::Duration;

pub async fn run(term: &str, json: bool) -> Result<()> {
    if term.trim().is_empty() {
        anyhow::bail!("Search term must not be empty");
    }

    // 1. Load configuration
    let config = system_config::load().context("Failed to load configuration")?;

    // 2. Build client
    let client = JokeClient::new(&config.search).context("Failed to create search client")?;

    // 3. Search with a spinner while the request is in flight
    let spinner = if json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Searching for '{}'...", term));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = client.search(term).await;
    spinner.finish_and_clear();

    let response = result.with_context(|| format!("Search for '{}' failed", term))?;

    // 4. Display results
    if json {
        println!("{}", serde_json::to_string_pretty(&response.results)?);
        return Ok(());
    }

    if response.results.is_empty() {
        println!("{}", format!("No jokes found for '{}'", term).dimmed());
        return Ok(());
    }

    println!("{}", format!("Jokes matching '{}'", term).bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, joke) in response.results.iter().enumerate() {
        println!("{:>3}. {}", (i + 1).yellow(), joke.joke);
    }
    println!();

    if response.has_more() {
        println!(
            "{}",
            format!(
                "Showing {} of {} jokes",
                response.results.len(),
                response.total_jokes
            )
            .dimmed()
        );
    }

    Ok(())
}
