//! Core types: colors, pieces, positions, directions, configuration, errors.
//!
//! Everything here is a small `Copy` value with no knowledge of the board.

pub mod color;
pub mod config;
pub mod error;
pub mod position;

pub use color::{Color, Piece};
pub use config::{GameConfig, GameMode};
pub use error::{BoardError, MoveError, PositionError};
pub use position::{Direction, Position, BOARD_SIZE, CELL_COUNT};
