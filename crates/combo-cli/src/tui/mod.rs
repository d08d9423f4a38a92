//! Terminal front end: genre, game and result panes over one score table.

mod app;
mod ui;

use std::io;

use anyhow::Result;
use combo_core::ScoreTable;
use crossterm::{
    cursor::Show,
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{info, warn};

use crate::cli::LabelSet;
use app::App;

/// Runs `restore` once when dropped, including during unwinding.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!("Failed to leave alternate screen: {}", e);
    }
}

/// Run the interactive UI until the user quits
pub fn run(table: ScoreTable, labels: LabelSet) -> Result<()> {
    let mut app = App::new(table, labels);

    enable_raw_mode()?;
    // Every exit from here on, `?` and panics included, restores the terminal
    let _restore = RestoreGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    event_loop(&mut terminal, &mut app)?;

    info!("UI closed");
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;
        app.handle_event(event::read()?);
    }
    Ok(())
}
