//! The 8x8 board.
//!
//! ## Storage
//!
//! Cells live in a flat row-major arena owned by the board. Neighbor
//! relations are not stored: they are recomputed from a cell's position, so
//! the link web can never become inconsistent and holds no back-references.
//!
//! ## Access
//!
//! External reads go through [`Board::top_left`] and link traversal, or by a
//! [`Position`] handle obtained from such a traversal. The only mutations are
//! placing a piece and toggling the legal-move annotation.

use crate::core::{Color, Direction, Piece, Position, BOARD_SIZE, CELL_COUNT};

use super::cell::Cell;
use super::cursor::{CellCursor, Cells, Ray};

/// The four opening discs, as placed by a standard game.
pub const OPENING: [(usize, usize, Color); 4] = [
    (3, 3, Color::White),
    (3, 4, Color::Black),
    (4, 3, Color::Black),
    (4, 4, Color::White),
];

/// An 8x8 Reversi board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with the standard opening position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::build();
        board.place_initial_pieces();
        board
    }

    /// A board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::build()
    }

    /// Lay out all 64 cells in row-major order.
    fn build() -> Self {
        let mut cells = [Cell::new(Position::TOP_LEFT); CELL_COUNT];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(position) = Position::new(row, col) {
                    cells[position.index()] = Cell::new(position);
                }
            }
        }
        Self { cells }
    }

    /// Place the four center discs.
    pub fn place_initial_pieces(&mut self) {
        for (row, col, color) in OPENING {
            if let Some(position) = Position::new(row, col) {
                self.set_piece(position, color.into());
            }
        }
    }

    /// Entry point for link traversal.
    #[must_use]
    pub fn top_left(&self) -> CellCursor<'_> {
        CellCursor::new(self, Position::TOP_LEFT)
    }

    /// Cursor at a known position.
    #[must_use]
    pub fn cursor(&self, position: Position) -> CellCursor<'_> {
        CellCursor::new(self, position)
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> &Cell {
        &self.cells[position.index()]
    }

    #[must_use]
    pub fn piece(&self, position: Position) -> Piece {
        self.cell(position).piece()
    }

    /// The neighbor of `position` in `dir`, `None` at the edge.
    #[must_use]
    pub fn neighbor(&self, position: Position, dir: Direction) -> Option<Position> {
        position.step(dir)
    }

    /// Cells beyond `origin` in `dir`, nearest first.
    pub fn ray(&self, origin: Position, dir: Direction) -> Ray<'_> {
        Ray::new(self, origin, dir)
    }

    /// Every cell in row-major order, reached from the top-left corner.
    pub fn cells(&self) -> Cells<'_> {
        Cells::new(self.top_left())
    }

    /// Number of cells holding `piece`.
    #[must_use]
    pub fn count(&self, piece: Piece) -> usize {
        self.cells().filter(|cell| cell.piece() == piece).count()
    }

    pub fn set_piece(&mut self, position: Position, piece: Piece) {
        self.cells[position.index()].set_piece(piece);
    }

    pub fn set_legal_move(&mut self, position: Position, legal: bool) {
        self.cells[position.index()].set_legal_move(legal);
    }

    /// Drop every legal-move annotation.
    pub fn clear_legal_moves(&mut self) {
        for cell in &mut self.cells {
            cell.set_legal_move(false);
        }
    }

    /// Verify the neighbor web.
    ///
    /// Checks that outward links at the edges are absent, that every link
    /// has a matching back-link, that diagonals agree with the cardinal
    /// compositions, and that east/south composition from the corner reaches
    /// all 64 cells.
    #[must_use]
    pub fn check_links(&self) -> bool {
        let last = BOARD_SIZE - 1;
        let edges_open = self.cells().all(|cell| {
            let p = cell.position();
            (p.row() != 0 || self.neighbor(p, Direction::North).is_none())
                && (p.row() != last || self.neighbor(p, Direction::South).is_none())
                && (p.col() != 0 || self.neighbor(p, Direction::West).is_none())
                && (p.col() != last || self.neighbor(p, Direction::East).is_none())
        });

        let symmetric = self.cells().all(|cell| {
            let p = cell.position();
            Direction::ALL.iter().all(|&dir| match self.neighbor(p, dir) {
                Some(q) => self.neighbor(q, dir.opposite()) == Some(p),
                None => true,
            })
        });

        let diagonals = self.cells().all(|cell| {
            let p = cell.position();
            let via = |first: Direction, second: Direction| {
                self.neighbor(p, first).and_then(|q| self.neighbor(q, second))
            };
            via(Direction::North, Direction::East) == self.neighbor(p, Direction::NorthEast)
                && via(Direction::North, Direction::West) == self.neighbor(p, Direction::NorthWest)
                && via(Direction::South, Direction::East) == self.neighbor(p, Direction::SouthEast)
                && via(Direction::South, Direction::West) == self.neighbor(p, Direction::SouthWest)
                && match (
                    via(Direction::West, Direction::SouthEast),
                    self.neighbor(p, Direction::South),
                ) {
                    (Some(a), Some(b)) => a == b,
                    _ => true,
                }
        });

        edges_open && symmetric && diagonals && self.cells().count() == CELL_COUNT
    }
}
