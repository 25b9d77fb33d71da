//! Search state management

use crate::debounce::Debouncer;
use std::time::Duration;

/// Search state for the GUI.
///
/// The text edit mutates `query` directly; the app re-arms `debouncer`
/// whenever the edit reports a change, so the rendered value is always
/// current while at most one fetch trigger is outstanding.
pub struct SearchState {
    /// Current search query
    pub query: String,
    /// The single pending fetch trigger
    pub debouncer: Debouncer,
    /// First frame flag (for auto-focus)
    pub first_frame: bool,
}

impl SearchState {
    pub fn new(delay: Duration) -> Self {
        Self {
            query: String::new(),
            debouncer: Debouncer::new(delay),
            first_frame: true,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(crate::debounce::DEFAULT_DELAY)
    }
}
