//! Player colors and cell contents.
//!
//! ## Color
//!
//! The two sides of a game. Black always moves first unless a scenario
//! says otherwise.
//!
//! ## Piece
//!
//! What a cell holds: a disc of either color, or nothing.

use serde::{Deserialize, Serialize};

/// A player's color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, Black first.
    pub const BOTH: [Color; 2] = [Color::Black, Color::White];

    /// The other side.
    ///
    /// ```
    /// use reversi_core::core::Color;
    ///
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Black,
    White,
    #[default]
    Empty,
}

impl Piece {
    /// The owning color, `None` for an empty cell.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Black => Some(Color::Black),
            Piece::White => Some(Color::White),
            Piece::Empty => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// True if this cell holds a disc of `color`.
    #[must_use]
    pub fn is(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Single-character glyph used by text layouts: `B`, `W` or `.`.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Piece::Black => 'B',
            Piece::White => 'W',
            Piece::Empty => '.',
        }
    }

    /// Inverse of [`Piece::glyph`].
    #[must_use]
    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            'B' | 'b' => Some(Piece::Black),
            'W' | 'w' => Some(Piece::White),
            '.' => Some(Piece::Empty),
            _ => None,
        }
    }
}

impl From<Color> for Piece {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Piece::Black,
            Color::White => Piece::White,
        }
    }
}
