//! Search controller
//!
//! Routes every keystroke through a [`Debouncer`] so that only the input value
//! left after a quiet period reaches the joke source. Built once per search
//! session; dropping it cancels a search that has not fired yet.

use crate::client::JokeSource;
use crate::config::SearchConfig;
use crate::joke::Joke;
use crate::state::SearchState;
use debounce::Debouncer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info};

/// State shared between the controller and its debounced search action
struct Shared {
    /// Published session state
    state: watch::Sender<SearchState>,
    /// Where searches go
    source: Arc<dyn JokeSource>,
    /// Number of the most recently fired search
    sequence: AtomicU64,
    /// Drop responses overtaken by a newer search
    discard_stale: bool,
}

impl Shared {
    /// Synchronous part of a fired search
    ///
    /// Takes the next sequence number and updates the state right away, so
    /// there is no gap where the search is neither pending nor loading.
    /// Returns `None` for a blank term, which only clears the results.
    fn start(&self, term: &str) -> Option<u64> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        if term.trim().is_empty() {
            debug!("Blank search term, clearing results");
            self.state.send_modify(SearchState::clear_results);
            return None;
        }

        self.state.send_modify(SearchState::begin_loading);
        Some(seq)
    }

    /// Query the source and apply the outcome unless a newer search fired
    async fn complete(&self, seq: u64, term: String) {
        let outcome = self.source.search(&term).await;

        if self.discard_stale && self.sequence.load(Ordering::SeqCst) != seq {
            debug!("Discarding stale response for '{}' (search #{})", term, seq);
            return;
        }

        match outcome {
            Ok(response) => {
                info!("Found {} jokes for '{}'", response.results.len(), term);
                self.state
                    .send_modify(|state| state.apply_results(response.results));
            }
            Err(e) => {
                error!("Search for '{}' failed: {}", term, e);
                self.state.send_modify(SearchState::finish_with_error);
            }
        }
    }
}

/// Debounced search session
pub struct SearchController {
    /// Debounced search action, fed by `on_input`
    debouncer: Debouncer<String>,
    /// Shared with the search action
    shared: Arc<Shared>,
}

impl SearchController {
    /// Create a controller searching `source` after `delay` of silence
    pub fn new(source: Arc<dyn JokeSource>, delay: Duration, discard_stale: bool) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        let shared = Arc::new(Shared {
            state,
            source,
            sequence: AtomicU64::new(0),
            discard_stale,
        });

        let action_shared = Arc::clone(&shared);
        let debouncer = Debouncer::new(delay, move |term: String| {
            let shared = Arc::clone(&action_shared);
            let started = shared.start(&term);
            async move {
                if let Some(seq) = started {
                    shared.complete(seq, term).await;
                }
            }
        });

        Self { debouncer, shared }
    }

    /// Create a controller with delay and stale policy from configuration
    pub fn from_config(source: Arc<dyn JokeSource>, config: &SearchConfig) -> Self {
        Self::new(source, config.delay(), config.discard_stale_responses)
    }

    /// Input changed: record it now, search once typing pauses
    pub fn on_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.shared
            .state
            .send_modify(|state| state.set_input(text.clone()));
        self.debouncer.invoke(text);
    }

    /// Flip dropdown visibility
    pub fn toggle_list(&self) {
        self.shared.state.send_modify(SearchState::toggle_list);
    }

    /// Pick the joke at `index` (0-based) from the current results
    pub fn select(&self, index: usize) -> Option<Joke> {
        let mut picked = None;
        self.shared.state.send_if_modified(|state| {
            picked = state.select(index).cloned();
            picked.is_some()
        });
        picked
    }

    /// Close the dropdown
    pub fn dismiss(&self) {
        self.shared.state.send_modify(SearchState::dismiss);
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.shared.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SearchState {
        self.shared.state.borrow().clone()
    }

    /// Whether a search is waiting for the quiet period to end
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Configured quiet period
    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }
}
