//! Debounced joke search for Quip
//!
//! This crate provides:
//! - Joke data structures and the search response body
//! - An HTTP client for the joke search endpoint
//! - Search session state (input, results, dropdown, selection)
//! - A controller that routes keystrokes through a debouncer
//! - Search configuration

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod joke;
pub mod state;

// Re-exports
pub use client::{JokeClient, JokeSource};
pub use config::SearchConfig;
pub use controller::SearchController;
pub use error::{ConfigError, SearchError};
pub use joke::{Joke, SearchResponse};
pub use state::SearchState;

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
