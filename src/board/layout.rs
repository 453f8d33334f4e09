//! Text layouts for boards.
//!
//! One line per row, one glyph per cell: `B` black, `W` white, `.` empty.
//! Rendering marks cells annotated as legal moves with `*`.

use std::fmt;

use crate::core::{BoardError, Piece, Position, BOARD_SIZE};

use super::grid::Board;

/// Glyph for an empty cell that the player to move may play.
pub const LEGAL_MOVE_GLYPH: char = '*';

impl Board {
    /// Parse a board from eight rows of glyphs.
    ///
    /// Whitespace inside a row is ignored and `*` reads as empty, so the
    /// output of `Display` parses back to the same pieces.
    ///
    /// ```
    /// use reversi_core::board::Board;
    ///
    /// let board = Board::from_rows(&[
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "...WB...",
    ///     "...BW...",
    ///     "........",
    ///     "........",
    ///     "........",
    /// ]).unwrap();
    /// assert_eq!(board, Board::new());
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != BOARD_SIZE {
                return Err(BoardError::RowWidth {
                    row,
                    expected: BOARD_SIZE,
                    found: glyphs.len(),
                });
            }

            for (col, glyph) in glyphs.into_iter().enumerate() {
                let piece = match glyph {
                    LEGAL_MOVE_GLYPH => Piece::Empty,
                    other => Piece::from_glyph(other)
                        .ok_or(BoardError::UnknownGlyph { row, col, glyph })?,
                };
                if let Some(position) = Position::new(row, col) {
                    board.set_piece(position, piece);
                }
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            let glyph = if cell.is_empty() && cell.is_legal_move() {
                LEGAL_MOVE_GLYPH
            } else {
                cell.piece().glyph()
            };
            write!(f, "{glyph}")?;
            if cell.position().col() == BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
