//! BarFind - Fast cocktail database search
//!
//! Combines live debounced lookup against TheCocktailDB with
//! Everything-style result browsing in the terminal or a native window.
//!
//! # Features
//!
//! - **Live Search**: keystrokes are debounced before a request goes out,
//!   so the database sees one query per pause, not one per character
//! - **Name / Id / Ingredient Lookup**: all of the public v1 endpoints
//! - **TUI and GUI**: sortable result tables over the same fetch plumbing
//! - **One-shot CLI**: scripting-friendly text, JSON and CSV output
//!
//! # Example
//!
//! ```no_run
//! use barfind::{DrinkClient, FetchConfig};
//!
//! fn main() -> barfind::Result<()> {
//!     let client = DrinkClient::new(FetchConfig::default())?;
//!
//!     let set = client.search_by_name("margarita")?;
//!
//!     println!("Matches: {}", set.stats.total);
//!     for drink in &set.drinks {
//!         println!("{} ({})", drink.name, drink.category);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod debounce;
pub mod error;
pub mod gui;
pub mod logging;
pub mod tui;

// Re-export main types
pub use api::{DrinkClient, FetchConfig};
pub use catalog::{AlcoholClass, Drink, DrinkSet, IngredientLine, SetStats};
pub use debounce::Debouncer;
pub use error::{BarFindError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format a provider `dateModified` value ("2017-09-02 18:37:52") for display.
/// Falls back to the raw string when it does not parse.
pub fn format_api_date(raw: &str) -> String {
    use chrono::NaiveDateTime;

    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Format a result count for status bars
pub fn format_count(count: usize) -> String {
    match count {
        0 => "no drinks".to_string(),
        1 => "1 drink".to_string(),
        n => format!("{} drinks", n),
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Quiet period between the last keystroke and the fetch, in milliseconds
    pub debounce_ms: u64,
    /// Maximum results kept from one fetch
    pub max_results: usize,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Override for the provider base URL
    pub base_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            max_results: 100,
            request_timeout_secs: 10,
            base_url: None,
        }
    }
}

impl AppConfig {
    /// Build the fetch configuration this app config implies
    pub fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig {
            timeout: std::time::Duration::from_secs(self.request_timeout_secs),
            max_results: self.max_results,
            ..Default::default()
        };
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_date_parses_provider_format() {
        assert_eq!(format_api_date("2017-09-02 18:37:52"), "2017-09-02");
    }

    #[test]
    fn api_date_passes_through_garbage() {
        assert_eq!(format_api_date("not a date"), "not a date");
    }

    #[test]
    fn count_formatting_pluralizes() {
        assert_eq!(format_count(0), "no drinks");
        assert_eq!(format_count(1), "1 drink");
        assert_eq!(format_count(25), "25 drinks");
    }

    #[test]
    fn app_config_feeds_fetch_config() {
        let app = AppConfig {
            request_timeout_secs: 3,
            max_results: 7,
            base_url: Some("http://localhost:9999/api".to_string()),
            ..Default::default()
        };
        let fetch = app.fetch_config();
        assert_eq!(fetch.timeout.as_secs(), 3);
        assert_eq!(fetch.max_results, 7);
        assert_eq!(fetch.base_url, "http://localhost:9999/api");
    }
}
