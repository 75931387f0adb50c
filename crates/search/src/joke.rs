//! Joke and search response data structures

use serde::{Deserialize, Serialize};

/// A single joke returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// Stable joke identifier
    pub id: String,
    /// Joke text
    pub joke: String,
}

/// JSON body of a search response
///
/// Only `results` is required; the paging fields default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching jokes for the requested page
    pub results: Vec<Joke>,

    #[serde(default)]
    pub current_page: u32,

    #[serde(default)]
    pub limit: u32,

    #[serde(default)]
    pub next_page: u32,

    #[serde(default)]
    pub previous_page: u32,

    #[serde(default)]
    pub search_term: String,

    #[serde(default)]
    pub status: u16,

    #[serde(default)]
    pub total_jokes: u32,

    #[serde(default)]
    pub total_pages: u32,
}

impl SearchResponse {
    /// Response carrying only a result list
    pub fn from_results(results: Vec<Joke>) -> Self {
        Self {
            total_jokes: results.len() as u32,
            results,
            current_page: 1,
            limit: 20,
            next_page: 1,
            previous_page: 1,
            search_term: String::new(),
            status: 200,
            total_pages: 1,
        }
    }

    /// Whether more pages are available past this one
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}
