//! Logging Module for BarFind
//!
//! Leveled, module-tagged logging to a file next to the executable.
//! The minimum level is taken from the BARFIND_LOG environment variable
//! (error|warn|info|debug, default info).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

/// Global logger instance
static LOGGER: OnceLock<Mutex<BarFindLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl LogLevel {
    fn from_env() -> Self {
        match std::env::var("BARFIND_LOG").as_deref() {
            Ok("debug") => LogLevel::Debug,
            Ok("warn") => LogLevel::Warn,
            Ok("error") => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

/// Main logger struct
pub struct BarFindLogger {
    file: Option<File>,
    min_level: LogLevel,
}

impl BarFindLogger {
    fn new() -> Self {
        let log_path = Self::get_log_path();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(&log_path)
            .ok();

        Self {
            file,
            min_level: LogLevel::from_env(),
        }
    }

    /// Get the log file path (same directory as executable)
    fn get_log_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("barfind.log")
    }

    /// Write a log entry
    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let entry = format!(
            "[{:013}] [{:5}] [{}] {}\n",
            timestamp, level, module, message
        );

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(entry.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Initialize the global logger
pub fn init() {
    let _ = LOGGER.set(Mutex::new(BarFindLogger::new()));
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            l.log(level, module, message);
        }
    }
}

/// Log debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log warning message
pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Log error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

// ============================================================================
// Specialized logging functions for the fetch path
// ============================================================================

/// Log an outgoing provider request
pub fn log_fetch_request(operation: &str, term: &str) {
    let msg = format!("Request: op={}, term='{}'", operation, term);
    info("FETCH", &msg);
}

/// Log a completed provider response
pub fn log_fetch_response(operation: &str, term: &str, count: usize, elapsed_ms: u128) {
    let msg = format!(
        "Response: op={}, term='{}', drinks={}, elapsed={}ms",
        operation, term, count, elapsed_ms
    );
    info("FETCH", &msg);
}

/// Log a failed provider call
pub fn log_fetch_error(operation: &str, term: &str, err: &str) {
    let msg = format!("Failed: op={}, term='{}', error={}", operation, term, err);
    error("FETCH", &msg);
}

/// Log a debounced trigger firing with its captured term
pub fn log_debounce_fire(term: &str) {
    let msg = format!("Debounce fired: term='{}'", term);
    debug("SEARCH", &msg);
}

/// Flush the log file
pub fn flush() {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            if let Some(ref mut file) = l.file {
                let _ = file.flush();
            }
        }
    }
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    let msg = format!("========== {} ==========", label);
    info("---", &msg);
}
