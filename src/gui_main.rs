//! BarFind GUI Entry Point
//!
//! Launches the Everything-like window for live cocktail search.

#![windows_subsystem = "windows"]

use barfind::AppConfig;

fn main() {
    barfind::logging::init();
    barfind::logging::info("MAIN", "BarFind GUI starting up");

    if let Err(e) = barfind::gui::run(&AppConfig::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
