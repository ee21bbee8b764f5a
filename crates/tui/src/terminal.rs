//! Terminal setup and teardown.
//!
//! The board needs raw mode, the alternate screen and mouse capture (for
//! drag and drop). All three are undone on exit, and on panic through
//! [`install_panic_hook`].

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal the board draws to.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Errors from preparing or releasing the terminal.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Switches the terminal into board mode.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if raw mode, the alternate screen or
/// mouse capture cannot be enabled.
///
/// # Examples
///
/// ```no_run
/// use tasklane_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok::<(), terminal::TerminalError>(())
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Returns the terminal to the state it was in before [`setup_terminal`].
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any step fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Installs a panic hook that releases the terminal before the previous
/// hook prints the panic.
///
/// Call once, before [`setup_terminal`].
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        previous(info);
    }));
}
