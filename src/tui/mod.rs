pub mod app;
pub mod colors;
pub mod search;
pub mod table;
pub mod ui;

use crate::error::{BarFindError, Result};
use crate::AppConfig;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::stdout;

/// Entry point: run the interactive terminal UI until the user quits
pub fn run(config: &AppConfig) -> Result<()> {
    let mut app = app::App::new(config)?;

    enable_raw_mode().map_err(|e| BarFindError::Terminal(e.to_string()))?;
    stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| BarFindError::Terminal(e.to_string()))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| BarFindError::Terminal(e.to_string()))?;

    let result = app.run(&mut terminal);

    // Restore the terminal even when the app loop failed
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);

    result
}
