//! Errors from the terminal shell around the game.

use thiserror::Error;

use crate::viewport::{MIN_COLS, MIN_ROWS};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "terminal is {cols}x{rows}; Coin Collector needs at least {min_cols}x{min_rows}",
        min_cols = MIN_COLS,
        min_rows = MIN_ROWS
    )]
    TerminalTooSmall { cols: u16, rows: u16 },
}
