//! Search session state
//!
//! Everything a renderer needs to draw the search box: the input value, the
//! dropdown contents and visibility, the loading flag and the selected joke.

use crate::joke::Joke;

/// State of one search session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Current input value
    pub search_text: String,
    /// Last applied result list
    pub jokes: Vec<Joke>,
    /// A request is in flight
    pub is_loading: bool,
    /// Text of the joke the user picked
    pub selected_joke: Option<String>,
    /// Dropdown visibility
    pub is_list_opened: bool,
}

impl SearchState {
    /// Record the current input value
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Blank term: empty the results and close the list
    pub fn clear_results(&mut self) {
        self.jokes.clear();
        self.is_list_opened = false;
        self.is_loading = false;
    }

    /// Mark a request in flight
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    /// Store a result list; the list opens only when there is something to show
    pub fn apply_results(&mut self, jokes: Vec<Joke>) {
        self.is_list_opened = !jokes.is_empty();
        self.jokes = jokes;
        self.is_loading = false;
    }

    /// Request failed: stop loading, keep whatever was shown before
    pub fn finish_with_error(&mut self) {
        self.is_loading = false;
    }

    /// Flip dropdown visibility
    pub fn toggle_list(&mut self) {
        self.is_list_opened = !self.is_list_opened;
    }

    /// Pick the joke at `index` and close the list
    ///
    /// Returns the selected joke, or `None` (state untouched) when out of range.
    pub fn select(&mut self, index: usize) -> Option<&Joke> {
        let joke = self.jokes.get(index)?;
        self.selected_joke = Some(joke.joke.clone());
        self.is_list_opened = false;
        Some(joke)
    }

    /// Close the list (escape / click outside)
    pub fn dismiss(&mut self) {
        self.is_list_opened = false;
    }
}
