//! A single board cell.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Piece, Position};

/// One of the 64 board positions.
///
/// Only `piece` and `is_legal_move` ever change after the board is built.
/// The legal-move flag is a rendering hint for the player to move and is
/// not part of the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    piece: Piece,
    is_legal_move: bool,
}

impl Cell {
    pub(crate) const fn new(position: Position) -> Self {
        Self {
            position,
            piece: Piece::Empty,
            is_legal_move: false,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub const fn is_legal_move(&self) -> bool {
        self.is_legal_move
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_empty()
    }

    /// True if the cell holds a disc of `color`.
    #[must_use]
    pub fn holds(&self, color: Color) -> bool {
        self.piece.is(color)
    }

    pub(crate) fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    pub(crate) fn set_legal_move(&mut self, legal: bool) {
        self.is_legal_move = legal;
    }
}
