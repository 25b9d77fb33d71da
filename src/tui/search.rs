use crate::debounce::Debouncer;
use std::time::Duration;

/// Search input state for the TUI.
///
/// The rendered query is updated synchronously on every keystroke; the
/// embedded debouncer owns the single pending fetch trigger and is
/// re-armed (cancelling the old trigger) on the same keystroke.
pub struct SearchState {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
    pub debouncer: Debouncer,
}

impl SearchState {
    pub fn new(delay: Duration) -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
            debouncer: Debouncer::new(delay),
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(crate::debounce::DEFAULT_DELAY)
    }
}

/// Byte range of the first case-insensitive occurrence of `term` in `name`,
/// for highlighting the match inside result rows. Empty terms match nothing.
pub fn highlight_range(name: &str, term: &str) -> Option<(usize, usize)> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    let name_lower = name.to_lowercase();
    let term_lower = term.to_lowercase();
    let start = name_lower.find(&term_lower)?;

    // Lowercasing can change byte lengths (e.g. 'İ'); only hand out ranges
    // that fall on boundaries of the original string.
    let end = start + term_lower.len();
    if name.is_char_boundary(start) && name.is_char_boundary(end) && end <= name.len() {
        Some((start, end))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_case_insensitive_match() {
        assert_eq!(highlight_range("Margarita", "mar"), Some((0, 3)));
        assert_eq!(highlight_range("Blue Margarita", "MARG"), Some((5, 9)));
    }

    #[test]
    fn empty_or_whitespace_term_matches_nothing() {
        assert_eq!(highlight_range("Margarita", ""), None);
        assert_eq!(highlight_range("Margarita", "   "), None);
    }

    #[test]
    fn missing_term_matches_nothing() {
        assert_eq!(highlight_range("Margarita", "rum"), None);
    }

    #[test]
    fn state_starts_focused_with_no_pending_trigger() {
        let state = SearchState::default();
        assert!(state.focused);
        assert!(state.query.is_empty());
        assert!(!state.debouncer.is_pending());
    }
}
