//! Terminal rendering of the search box

use owo_colors::OwoColorize;
use search::SearchState;

/// Whether anything visible besides the input value changed
///
/// The input line echoes what was just typed, so redrawing on every
/// keystroke only adds noise.
pub fn view_changed(prev: &SearchState, next: &SearchState) -> bool {
    prev.jokes != next.jokes
        || prev.is_loading != next.is_loading
        || prev.is_list_opened != next.is_list_opened
        || prev.selected_joke != next.selected_joke
}

/// Render the whole search box
pub fn render_state(state: &SearchState) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Search Jokes".bold()));

    if let Some(selected) = &state.selected_joke {
        out.push_str(&format!("  {}\n", selected.green()));
    }

    let indicator = if state.is_loading {
        "searching...".yellow().to_string()
    } else if state.is_list_opened {
        "▲".dimmed().to_string()
    } else {
        "▼".dimmed().to_string()
    };
    out.push_str(&format!("  > {} {}\n", state.search_text.cyan(), indicator));

    if state.is_list_opened {
        for (i, joke) in state.jokes.iter().enumerate() {
            out.push_str(&format!("  {:>3}. {}\n", (i + 1).yellow(), joke.joke));
        }
    }

    out
}
