pub mod app;
pub mod colors;
pub mod dialogs;
pub mod search;
pub mod table;

pub use app::BarFindApp;

use crate::AppConfig;

/// Entry point: launch the native GUI window
pub fn run(config: &AppConfig) -> crate::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("BarFind \u{2014} Fast Cocktail Database Search")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let config = config.clone();
    eframe::run_native(
        "BarFind",
        native_options,
        Box::new(move |cc| match app::BarFindApp::new(cc, &config) {
            Ok(app) => Ok(Box::new(app)),
            Err(e) => Err(Box::new(e)),
        }),
    )
    .map_err(|e| crate::BarFindError::Gui(format!("GUI error: {}", e)))
}
