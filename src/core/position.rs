//! Cell identity and compass directions.
//!
//! A [`Position`] is the stable, comparable handle a presentation layer
//! round-trips back into the engine. Neighbors are never stored: stepping
//! in a [`Direction`] is an offset with a bounds check, and stepping off the
//! board yields `None` rather than wrapping.

use serde::{Deserialize, Serialize};

use super::error::PositionError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the 64 board positions (0-based row and column).
///
/// Serializes as a `[row, col]` pair and rejects off-board pairs on the way in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// The entry point of every traversal.
    pub const TOP_LEFT: Position = Position { row: 0, col: 0 };

    /// Create a position, `None` if either coordinate is off the board.
    ///
    /// ```
    /// use reversi_core::core::Position;
    ///
    /// assert!(Position::new(7, 7).is_some());
    /// assert!(Position::new(8, 0).is_none());
    /// ```
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major slot in the backing storage.
    pub(crate) const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// The adjacent position in `dir`, `None` at the board edge.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = PositionError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(PositionError::OutOfBounds { row, col })
    }
}

impl From<Position> for (usize, usize) {
    fn from(position: Position) -> Self {
        (position.row(), position.col())
    }
}

impl std::fmt::Display for Position {
    /// 1-based, as a player would read it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// The eight neighbor relations of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All directions, cardinals first.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// `(row, col)` delta. North is toward row 0.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_bounds() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(7, 7).is_some());
        assert!(Position::new(8, 7).is_none());
        assert!(Position::new(7, 8).is_none());
        assert!(Position::new(usize::MAX, 0).is_none());
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Position::try_from((2usize, 3usize)), Ok(pos(2, 3)));
        assert_eq!(
            Position::try_from((9usize, 1usize)),
            Err(PositionError::OutOfBounds { row: 9, col: 1 })
        );
    }

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(pos(0, 0).index(), 0);
        assert_eq!(pos(0, 7).index(), 7);
        assert_eq!(pos(1, 0).index(), 8);
        assert_eq!(pos(7, 7).index(), 63);
    }

    #[test]
    fn test_step_never_wraps() {
        let top_left = Position::TOP_LEFT;
        assert_eq!(top_left.step(Direction::North), None);
        assert_eq!(top_left.step(Direction::West), None);
        assert_eq!(top_left.step(Direction::NorthWest), None);
        assert_eq!(top_left.step(Direction::SouthWest), None);
        assert_eq!(top_left.step(Direction::East), Some(pos(0, 1)));
        assert_eq!(top_left.step(Direction::SouthEast), Some(pos(1, 1)));

        let right_edge = pos(3, 7);
        assert_eq!(right_edge.step(Direction::East), None);
        assert_eq!(right_edge.step(Direction::NorthEast), None);
        assert_eq!(right_edge.step(Direction::SouthEast), None);

        let bottom_right = pos(7, 7);
        assert_eq!(bottom_right.step(Direction::South), None);
        assert_eq!(bottom_right.step(Direction::North), Some(pos(6, 7)));
    }

    #[test]
    fn test_opposite_steps_back() {
        let center = pos(4, 4);
        for dir in Direction::ALL {
            let there = center.step(dir).unwrap();
            assert_eq!(there.step(dir.opposite()), Some(center));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_offsets_are_distinct() {
        let mut offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        offsets.sort_unstable();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(format!("{}", pos(0, 0)), "(1, 1)");
        assert_eq!(format!("{}", pos(3, 4)), "(4, 5)");
    }

    #[test]
    fn test_position_serialization() {
        let p = pos(5, 2);
        let json = serde_json::to_string(&p).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(json, "[5,2]");
        assert_eq!(p, back);
    }

    #[test]
    fn test_off_board_deserialization_fails() {
        assert!(serde_json::from_str::<Position>("[8,0]").is_err());
    }
}
