//! Board representation: 64 cells wired as an 8x8 grid of neighbor links.
//!
//! - `cell`: a single position with its piece and legal-move annotation
//! - `grid`: the board itself, its opening setup and link verification
//! - `cursor`: link-relative traversal (cursors, row-major walk, rays)
//! - `layout`: text layouts for parsing and rendering

pub mod cell;
pub mod cursor;
pub mod grid;
pub mod layout;

pub use cell::Cell;
pub use cursor::{CellCursor, Cells, Ray};
pub use grid::{Board, OPENING};
pub use layout::LEGAL_MOVE_GLYPH;
