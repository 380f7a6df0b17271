//! Terminal setup, teardown and the event loop.

use crate::{app::App, ui};
use crossterm::{
    ExecutableCommand,
    event::{self, Event},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use guidepost_error::{TuiError, TuiErrorKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

type Backend = CrosstermBackend<Stdout>;

/// Run the app until the user quits.
///
/// The terminal is restored even when the loop fails.
#[tracing::instrument(skip_all)]
pub fn run(app: &mut App) -> Result<(), TuiError> {
    tracing::info!(title = %app.navigator.guide().title(), "Starting viewer");

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, app);
    restore_terminal(&mut terminal)?;

    tracing::info!("Viewer closed");
    result
}

fn setup_terminal() -> Result<Terminal<Backend>, TuiError> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)
        .map_err(terminal_error)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error)
}

fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<(), TuiError> {
    disable_raw_mode().map_err(terminal_error)?;
    terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)
}

fn run_loop(terminal: &mut Terminal<Backend>, app: &mut App) -> Result<(), TuiError> {
    while !app.should_quit {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| TuiError::new(TuiErrorKind::Render(e.to_string())))?;

        let event = event::read().map_err(|e| TuiError::new(TuiErrorKind::Event(e.to_string())))?;
        if let Event::Key(key) = event {
            app.handle_key(key);
        }
    }
    Ok(())
}

#[track_caller]
fn terminal_error(e: io::Error) -> TuiError {
    TuiError::new(TuiErrorKind::Terminal(e.to_string()))
}
