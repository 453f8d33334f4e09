//! Piece counts and game results.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Color, Piece};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// More discs of this color.
    Winner(Color),
    /// Equal counts.
    Draw,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Color) -> bool {
        matches!(self, Outcome::Winner(c) if *c == player)
    }
}

/// Disc counts for both colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// Count discs with a full-board scan.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        board.cells().fold(Self::default(), |mut score, cell| {
            match cell.piece() {
                Piece::Black => score.black += 1,
                Piece::White => score.white += 1,
                Piece::Empty => {}
            }
            score
        })
    }

    #[must_use]
    pub const fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Who leads on discs. Only final once the game is over.
    #[must_use]
    pub fn leader(&self) -> Outcome {
        use std::cmp::Ordering;

        match self.black.cmp(&self.white) {
            Ordering::Greater => Outcome::Winner(Color::Black),
            Ordering::Less => Outcome::Winner(Color::White),
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Result line with the winner's count first, e.g. `Black wins (33 - 31)`.
    #[must_use]
    pub fn winner_text(&self) -> String {
        match self.leader() {
            Outcome::Winner(Color::Black) => format!("Black wins ({} - {})", self.black, self.white),
            Outcome::Winner(Color::White) => format!("White wins ({} - {})", self.white, self.black),
            Outcome::Draw => format!("Draw ({} - {})", self.black, self.white),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Black {} - White {}", self.black, self.white)
    }
}
