use std::io;

use thiserror::Error;

use crate::config::{MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS};

/// Failures at the terminal boundary.
///
/// Game-domain events (collisions, game over) are state transitions in
/// the engine, never errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(
        "terminal is {cols}x{rows}, but the board needs at least \
         {MIN_TERMINAL_COLS}x{MIN_TERMINAL_ROWS}"
    )]
    TerminalTooSmall { cols: u16, rows: u16 },
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn too_small_error_names_both_sizes() {
        let error = AppError::TerminalTooSmall { cols: 10, rows: 8 };
        let message = error.to_string();

        assert!(message.contains("10x8"));
        assert!(message.contains("22x24"));
    }
}
