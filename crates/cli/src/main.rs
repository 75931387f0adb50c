//! Quip CLI - quip command

use clap::{Parser, Subcommand};
use anyhow::Result;

mod cmd;
mod logging;

/// Quip - debounced joke search in your terminal
#[derive(Parser)]
#[command(name = "quip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search as you type (default)
    Interactive {
        /// Quiet period before a search fires, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Search once and print the results
    Search {
        /// Search term
        term: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// View and edit configuration
    Config {
        /// List all configuration values
        #[arg(long)]
        list: bool,
        /// Get a configuration value
        #[arg(long, value_name = "KEY")]
        get: Option<String>,
        /// Set a configuration value
        #[arg(long, num_args = 2, value_names = ["KEY", "VALUE"])]
        set: Option<Vec<String>>,
        /// Show the config file path
        #[arg(long)]
        path: bool,
        /// Create the config file if missing (with --path)
        #[arg(long, requires = "path")]
        create: bool,
        /// Print an example configuration
        #[arg(long)]
        example: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Interactive { delay_ms: None });

    // Initialize tracing; interactive mode keeps stderr clean
    let _log_guard = match command {
        Commands::Interactive { .. } => logging::init_file(),
        _ => {
            logging::init_stderr();
            None
        }
    };

    match command {
        Commands::Interactive { delay_ms } => cmd::interactive::run(delay_ms).await,
        Commands::Search { term, json } => cmd::search::run(&term, json).await,
        Commands::Config { list, get, set, path, create, example } => {
            if list {
                cmd::config::run_list().await
            } else if let Some(key) = get {
                cmd::config::run_get(&key).await
            } else if let Some(pair) = set {
                cmd::config::run_set(&pair[0], &pair[1]).await
            } else if path {
                cmd::config::run_path(create).await
            } else if example {
                cmd::config::run_example().await
            } else {
                cmd::config::run_list().await
            }
        }
    }
}
