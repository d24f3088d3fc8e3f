use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::{MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS};
use crate::error::AppError;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one run.
///
/// Restores the terminal best-effort on drop; `install_panic_hook` covers
/// the panic path, where drop order is not guaranteed to run first.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Validates the window size, then enters raw mode and the alternate
    /// screen.
    pub fn enter() -> Result<Self, AppError> {
        let (cols, rows) = size()?;
        if cols < MIN_TERMINAL_COLS || rows < MIN_TERMINAL_ROWS {
            return Err(AppError::TerminalTooSmall { cols, rows });
        }

        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore_terminal_best_effort();
                Err(error.into())
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal_best_effort();
    }
}

/// Chains a terminal restore in front of the default panic handler so a
/// panic message is readable instead of lost to the alternate screen.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_best_effort();
        default_hook(panic_info);
    }));
}

fn restore_terminal_best_effort() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
