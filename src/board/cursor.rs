//! Link-relative traversal over a [`Board`].
//!
//! Callers never index the grid. They start from the top-left cursor and
//! follow neighbor links; an absent link is `None`, never a wrap-around.
//!
//! ```
//! use reversi_core::board::Board;
//! use reversi_core::core::Direction;
//!
//! let board = Board::new();
//! let corner = board.top_left();
//! assert!(corner.step(Direction::North).is_none());
//! assert_eq!(corner.east().and_then(|c| c.south()).map(|c| c.position()),
//!            corner.step(Direction::SouthEast).map(|c| c.position()));
//! ```

use crate::core::{Direction, Piece, Position};

use super::cell::Cell;
use super::grid::Board;

/// A read-only handle to one cell that knows how to reach its neighbors.
#[derive(Clone, Copy, Debug)]
pub struct CellCursor<'a> {
    board: &'a Board,
    position: Position,
}

impl<'a> CellCursor<'a> {
    pub(crate) fn new(board: &'a Board, position: Position) -> Self {
        Self { board, position }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn cell(&self) -> &'a Cell {
        self.board.cell(self.position)
    }

    #[must_use]
    pub fn piece(&self) -> Piece {
        self.cell().piece()
    }

    /// Follow the link in `dir`.
    #[must_use]
    pub fn step(&self, dir: Direction) -> Option<CellCursor<'a>> {
        self.position
            .step(dir)
            .map(|position| CellCursor::new(self.board, position))
    }

    #[must_use]
    pub fn east(&self) -> Option<CellCursor<'a>> {
        self.step(Direction::East)
    }

    #[must_use]
    pub fn south(&self) -> Option<CellCursor<'a>> {
        self.step(Direction::South)
    }
}

impl PartialEq for CellCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.board, other.board) && self.position == other.position
    }
}

impl Eq for CellCursor<'_> {}

/// Row-major walk: east along a row, then south to the next row start.
#[derive(Clone, Debug)]
pub struct Cells<'a> {
    row_start: Option<CellCursor<'a>>,
    current: Option<CellCursor<'a>>,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(top_left: CellCursor<'a>) -> Self {
        Self {
            row_start: Some(top_left),
            current: Some(top_left),
        }
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match self.current {
            Some(cursor) => cursor,
            None => {
                self.row_start = self.row_start.and_then(|start| start.south());
                self.row_start?
            }
        };
        self.current = current.east();
        Some(current.cell())
    }
}

/// Cells strictly beyond a starting position in one direction, up to the edge.
#[derive(Clone, Debug)]
pub struct Ray<'a> {
    board: &'a Board,
    next: Option<Position>,
    dir: Direction,
}

impl<'a> Ray<'a> {
    pub(crate) fn new(board: &'a Board, origin: Position, dir: Direction) -> Self {
        Self {
            board,
            next: origin.step(dir),
            dir,
        }
    }
}

impl<'a> Iterator for Ray<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.next?;
        self.next = position.step(self.dir);
        Some(self.board.cell(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BOARD_SIZE, CELL_COUNT};

    #[test]
    fn test_cells_visits_every_cell_row_major() {
        let board = Board::new();
        let positions: Vec<_> = board.cells().map(|c| c.position()).collect();

        assert_eq!(positions.len(), CELL_COUNT);
        for (i, p) in positions.iter().enumerate() {
            assert_eq!(p.row(), i / BOARD_SIZE);
            assert_eq!(p.col(), i % BOARD_SIZE);
        }
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let board = Board::new();
        let origin = Position::new(0, 5).unwrap();

        assert_eq!(board.ray(origin, Direction::East).count(), 2);
        assert_eq!(board.ray(origin, Direction::North).count(), 0);
        assert_eq!(board.ray(origin, Direction::South).count(), 7);
        assert_eq!(board.ray(origin, Direction::SouthWest).count(), 5);
    }

    #[test]
    fn test_ray_excludes_origin() {
        let board = Board::new();
        let origin = Position::new(3, 3).unwrap();
        let first = board.ray(origin, Direction::East).next().unwrap();
        assert_eq!(first.position(), Position::new(3, 4).unwrap());
    }

    #[test]
    fn test_cursor_equality() {
        let board = Board::new();
        let a = board.top_left().east().unwrap();
        let b = board.top_left().step(Direction::East).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, board.top_left());
    }
}
