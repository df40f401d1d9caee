//! Terminal front-end for the calculator

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{layout, render, Areas, CalculatorUI, HELP_BUTTONS, HELP_SHORTCUTS};

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{info, warn};

use crate::config::UiConfig;
use crate::error::AppResult;

/// Runs the interactive calculator until the user quits
///
/// Once raw mode is on, the terminal is restored whether setup, the event
/// loop, or neither fails.
pub fn run(ui: UiConfig) -> AppResult<()> {
    enable_raw_mode()?;
    info!("terminal UI started");
    let result = with_restore(
        || {
            let mut terminal = enter_screen()?;
            run_app(&mut terminal, CalculatorApp::with_config(ui))
        },
        restore_terminal,
    );
    info!("terminal UI stopped");
    result
}

fn enter_screen() -> AppResult<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Undoes every terminal mode `run` may have set, attempting each step
fn restore_terminal() -> AppResult<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)?;
    Ok(())
}

/// Runs `body`, then `restore` no matter how `body` ended
///
/// The body's error wins over a restore error.
fn with_restore<T>(
    body: impl FnOnce() -> AppResult<T>,
    restore: impl FnOnce() -> AppResult<()>,
) -> AppResult<T> {
    let result = body();
    let restored = restore();
    match (result, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore_err)) => {
            warn!(error = %restore_err, "terminal restore failed");
            Err(e)
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> AppResult<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        let event = event::read()?;
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        app.apply(input_handler.handle_event(&event), area);
    }

    Ok(())
}
