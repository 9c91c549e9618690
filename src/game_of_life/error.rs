//! Error conditions raised by the board model and its text loader

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Direct cell access outside the board. A caller bug, never produced by `tick`.
    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Text input that does not describe a dimensionally consistent board.
    /// `line` is 1-based, or 0 when the problem is not tied to a single line.
    #[error("malformed board at line {line}: {reason}")]
    MalformedBoard { line: usize, reason: String },
}

impl BoardError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        BoardError::MalformedBoard {
            line,
            reason: reason.into(),
        }
    }
}
