//! # reversi-core
//!
//! Rule engine for Reversi (Othello).
//!
//! ## Design Principles
//!
//! 1. **Link-Relative Access**: The board is reached from its top-left cell by
//!    following neighbor links. Links are derived from positions, never stored,
//!    so they cannot go stale and form no ownership cycles.
//!
//! 2. **Stateless Rules**: `RuleEngine` reads and mutates only the board it is
//!    handed. All turn state lives in `TurnController`.
//!
//! 3. **No Exceptions for Expected Conditions**: an illegal move is a `false`
//!    (or a `MoveError`), a stuck player is a forced pass, and game over is a
//!    query result.
//!
//! ## Modules
//!
//! - `core`: Colors, pieces, positions, directions, configuration, errors
//! - `board`: Cells, the 8x8 board, traversal cursors, text layouts
//! - `rules`: Legality and capture
//! - `game`: Turn control, game state, scoring
//! - `bot`: Pluggable bot strategies
//!
//! ## Example
//!
//! ```
//! use reversi_core::{Color, Position, TurnController};
//!
//! let mut game = TurnController::new();
//! assert!(game.play_move(Position::new(2, 3).unwrap()));
//! assert_eq!(game.current_player(), Color::White);
//! assert_eq!(game.count_pieces(Color::Black), 4);
//! ```

pub mod board;
pub mod bot;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Color, Direction, GameConfig, GameMode, MoveError, Piece, Position,
    PositionError, BOARD_SIZE, CELL_COUNT,
};

pub use crate::board::{Board, Cell, CellCursor};

pub use crate::rules::RuleEngine;

pub use crate::game::{GameState, Outcome, Score, TurnController, TurnReport};

pub use crate::bot::{BotStrategy, FirstLegalMove, RandomMove};
