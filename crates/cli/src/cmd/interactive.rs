//! Interactive search session
//!
//! Reads stdin line by line. Plain lines replace the search box value and go
//! through the debounced search; colon commands drive the dropdown. A render
//! task redraws the search box whenever its visible state changes.

use anyhow::{Context, Result};
use cli_lib::input::{self, InputLine};
use cli_lib::render;
use cli_lib::system_config;
use owo_colors::OwoColorize;
use search::{JokeClient, JokeSource, SearchController, SearchState};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{debug, info};

/// How often to check whether a search is still outstanding at end of input
const DRAIN_POLL: Duration = Duration::from_millis(25);

pub async fn run(delay_ms: Option<u64>) -> Result<()> {
    // 1. Load configuration, applying the command-line override
    let mut config = system_config::load().context("Failed to load configuration")?;
    if let Some(delay_ms) = delay_ms {
        config.search.delay_ms = delay_ms;
    }
    config.search.validate().context("Invalid search configuration")?;

    // 2. One controller for the whole session
    let client = JokeClient::new(&config.search).context("Failed to create search client")?;
    let source: Arc<dyn JokeSource> = Arc::new(client);
    let mut controller = SearchController::from_config(source, &config.search);
    info!(
        "Interactive session started (delay: {:?}, endpoint: {})",
        controller.delay(),
        config.search.endpoint
    );

    // 3. Redraw on state changes
    let renderer = tokio::spawn(render_loop(controller.subscribe()));

    println!("{}", input::HELP.dimmed());
    println!();

    // 4. Feed stdin lines to the controller
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut quit = false;

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match input::parse_line(&line) {
            InputLine::Text(text) => controller.on_input(text),
            InputLine::Toggle => controller.toggle_list(),
            InputLine::Escape => controller.dismiss(),
            InputLine::Select(index) => {
                if controller.select(index).is_none() {
                    println!("{}", format!("No joke #{} in the list", index + 1).yellow());
                }
            }
            InputLine::Show => print!("{}", render::render_state(&controller.snapshot())),
            InputLine::Help => println!("{}", input::HELP.dimmed()),
            InputLine::Quit => {
                quit = true;
                break;
            }
            InputLine::Unknown(raw) => {
                println!("{} {}", "Unknown command:".yellow(), raw);
            }
        }
    }

    // 5. End of input: let the last search land before exiting
    if !quit {
        let budget = controller.delay() + config.search.timeout() + Duration::from_secs(1);
        if tokio::time::timeout(budget, drain(&controller)).await.is_err() {
            debug!("Gave up waiting for the last search after {:?}", budget);
        }
    }

    renderer.abort();
    print!("{}", render::render_state(&controller.snapshot()));

    info!("Interactive session ended");
    Ok(())
}

/// Wait until no search is scheduled or in flight
async fn drain(controller: &SearchController) {
    while controller.is_pending() || controller.snapshot().is_loading {
        tokio::time::sleep(DRAIN_POLL).await;
    }
}

/// Print the search box each time something visible changes
async fn render_loop(mut updates: watch::Receiver<SearchState>) {
    let mut shown = updates.borrow_and_update().clone();

    while updates.changed().await.is_ok() {
        let next = updates.borrow_and_update().clone();
        if render::view_changed(&shown, &next) {
            print!("{}", render::render_state(&next));
        }
        shown = next;
    }
}
