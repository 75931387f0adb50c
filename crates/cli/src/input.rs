//! Line input for interactive mode
//!
//! Each stdin line is either a new value for the search box or a colon
//! command acting on the dropdown.

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// New search box value
    Text(String),
    /// `:toggle` - open/close the dropdown
    Toggle,
    /// `:select N` - pick the Nth joke (stored 0-based)
    Select(usize),
    /// `:esc` - close the dropdown
    Escape,
    /// `:show` - redraw the current state
    Show,
    /// `:help`
    Help,
    /// `:quit`
    Quit,
    /// Unrecognized colon command
    Unknown(String),
}

/// Parse a line typed at the prompt
///
/// `::text` escapes a leading colon and searches for `:text`.
pub fn parse_line(line: &str) -> InputLine {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.strip_prefix(':') else {
        return InputLine::Text(line.to_string());
    };

    if command.starts_with(':') {
        return InputLine::Text(command.to_string());
    }

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("toggle" | "t"), None, _) => InputLine::Toggle,
        (Some("esc" | "escape"), None, _) => InputLine::Escape,
        (Some("show" | "s"), None, _) => InputLine::Show,
        (Some("help" | "h" | "?"), None, _) => InputLine::Help,
        (Some("quit" | "q"), None, _) => InputLine::Quit,
        (Some("select" | "sel"), Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => InputLine::Select(n - 1),
            _ => InputLine::Unknown(line.to_string()),
        },
        _ => InputLine::Unknown(line.to_string()),
    }
}

/// Help text for interactive mode
pub const HELP: &str = "\
Type to search; every line replaces the search box.
  :select N   pick joke N from the list
  :toggle     open/close the list
  :esc        close the list
  :show       redraw
  :quit       exit
  ::text      search for text starting with ':'";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_line("dog"), InputLine::Text("dog".to_string()));
        assert_eq!(parse_line("hot dog\r\n"), InputLine::Text("hot dog".to_string()));
        assert_eq!(parse_line(""), InputLine::Text(String::new()));
        assert_eq!(parse_line("   "), InputLine::Text("   ".to_string()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_line(":toggle"), InputLine::Toggle);
        assert_eq!(parse_line(":esc"), InputLine::Escape);
        assert_eq!(parse_line(":show"), InputLine::Show);
        assert_eq!(parse_line(":q"), InputLine::Quit);
        assert_eq!(parse_line(":help"), InputLine::Help);
    }

    #[test]
    fn test_select_is_one_based() {
        assert_eq!(parse_line(":select 1"), InputLine::Select(0));
        assert_eq!(parse_line(":sel 12"), InputLine::Select(11));
        assert_eq!(
            parse_line(":select 0"),
            InputLine::Unknown(":select 0".to_string())
        );
        assert_eq!(
            parse_line(":select x"),
            InputLine::Unknown(":select x".to_string())
        );
        assert_eq!(
            parse_line(":select"),
            InputLine::Unknown(":select".to_string())
        );
    }

    #[test]
    fn test_escaped_colon() {
        assert_eq!(parse_line("::)"), InputLine::Text(":)".to_string()));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse_line(":dance"), InputLine::Unknown(":dance".to_string()));
    }
}
