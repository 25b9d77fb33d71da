//! Error types for BarFind
//!
//! Comprehensive error handling for all provider operations

use thiserror::Error;

/// Main error type for BarFind operations
#[derive(Error, Debug)]
pub enum BarFindError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {status} for {operation}")]
    ApiStatus { operation: String, status: u16 },

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No drink with id '{0}'")]
    NotFound(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("GUI error: {0}")]
    Gui(String),
}

/// Result type alias for BarFind operations
pub type Result<T> = std::result::Result<T, BarFindError>;

impl BarFindError {
    /// Create a status error for a named provider operation
    pub fn from_status(operation: &str, status: u16) -> Self {
        BarFindError::ApiStatus {
            operation: operation.to_string(),
            status,
        }
    }

    /// Create a decode error with the payload context attached
    pub fn decode(context: &str, source: serde_json::Error) -> Self {
        BarFindError::Decode {
            context: context.to_string(),
            source,
        }
    }

    /// Check if this error is transient (retyping the query may succeed)
    pub fn is_transient(&self) -> bool {
        match self {
            BarFindError::Http(e) => e.is_timeout() || e.is_connect(),
            BarFindError::ApiStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_carry_operation_and_code() {
        let err = BarFindError::from_status("search.php", 503);
        assert!(err.is_transient());
        assert_eq!(
            err.to_string(),
            "Provider returned status 503 for search.php"
        );
    }

    #[test]
    fn client_errors_are_not_transient() {
        assert!(!BarFindError::from_status("lookup.php", 404).is_transient());
        assert!(!BarFindError::NotFound("11007".to_string()).is_transient());
    }

    #[test]
    fn rate_limiting_is_transient() {
        assert!(BarFindError::from_status("search.php", 429).is_transient());
    }
}
