//! Error types.
//!
//! None of these are fatal. An illegal move or a bad coordinate is an
//! expected condition that callers answer by re-prompting.

use thiserror::Error;

use super::color::Color;
use super::position::Position;

/// A coordinate pair that does not name a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
}

/// A text layout that does not describe an 8x8 board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    OutOfBounds(#[from] PositionError),

    #[error("{position} is already occupied")]
    Occupied { position: Position },

    #[error("{player} captures nothing at {position}")]
    NoCapture { position: Position, player: Color },
}
