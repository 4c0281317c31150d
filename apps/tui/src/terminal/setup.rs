use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};

/// Raw mode, alternate screen, hidden cursor. Undoes what it did on failure.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    tracing::debug!(width, height, "setting up terminal");

    enable_raw_mode().wrap_err("failed to enable raw mode")?;

    let mut out = stdout();
    if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
        cleanup_terminal_state(true, false);
        return Err(eyre!("failed to enter alternate screen: {e}"));
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(out)) {
        Ok(terminal) => terminal,
        Err(e) => {
            cleanup_terminal_state(true, true);
            return Err(eyre!("failed to create terminal: {e}"));
        }
    };

    if let Err(e) = terminal.clear() {
        tracing::warn!(error = %e, "failed to clear terminal");
    }

    Ok(terminal)
}

/// Restores whatever `setup_terminal` changed. Failures are logged, not returned.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut out = stdout();

    if let Err(e) = execute!(out, cursor::Show) {
        tracing::warn!(error = %e, "failed to show cursor");
    }

    if alternate_screen {
        if let Err(e) = execute!(out, LeaveAlternateScreen) {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }
    }

    let _ = execute!(out, cursor::MoveToNextLine(1));
    let _ = out.flush();
    tracing::debug!("terminal restored");
}
