//! Capture rules.
//!
//! A move at an empty cell is legal for a player when, in at least one of
//! the eight directions, the adjacent cells hold a contiguous run of one or
//! more opponent discs closed by one of the player's own discs. Applying the
//! move places the disc and flips every such run.
//!
//! The eight rays from one origin never share a cell, so each direction is
//! self-contained: flipping one run cannot change what another direction
//! captures, and the order directions are processed in is irrelevant.

use smallvec::SmallVec;
use tracing::trace;

use crate::board::Board;
use crate::core::{Color, Direction, Piece, Position};

/// Opponent discs captured along one direction, nearest first.
///
/// A ray holds at most six cells between an origin and a closing disc.
pub type CaptureRun = SmallVec<[Position; 6]>;

/// Every disc a move flips, across all directions.
pub type FlipSet = SmallVec<[Position; 24]>;

/// Stateless rule checks over a [`Board`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// The run `player` would capture from `origin` toward `dir`.
    ///
    /// `None` when the adjacent cell is not an opponent disc, or when the run
    /// reaches an empty cell or the board edge before a closing disc.
    /// The origin cell itself is not inspected.
    #[must_use]
    pub fn capture_run(
        &self,
        board: &Board,
        origin: Position,
        player: Color,
        dir: Direction,
    ) -> Option<CaptureRun> {
        let opponent = player.opponent();
        let mut run = CaptureRun::new();

        for cell in board.ray(origin, dir) {
            if cell.holds(opponent) {
                run.push(cell.position());
            } else if cell.holds(player) && !run.is_empty() {
                return Some(run);
            } else {
                return None;
            }
        }

        None
    }

    /// True if `player` may place a disc at `position`.
    ///
    /// Occupied cells are never legal.
    #[must_use]
    pub fn is_legal(&self, board: &Board, position: Position, player: Color) -> bool {
        if !board.cell(position).is_empty() {
            return false;
        }

        Direction::ALL
            .iter()
            .any(|&dir| self.capture_run(board, position, player, dir).is_some())
    }

    /// All discs a move at `position` would flip, gathered before any mutation.
    ///
    /// Empty when the move is illegal.
    #[must_use]
    pub fn flips(&self, board: &Board, position: Position, player: Color) -> FlipSet {
        if !board.cell(position).is_empty() {
            return FlipSet::new();
        }

        Direction::ALL
            .iter()
            .filter_map(|&dir| self.capture_run(board, position, player, dir))
            .flatten()
            .collect()
    }

    /// Place `player`'s disc at `position` and flip every captured run.
    ///
    /// Returns the number of discs flipped. An illegal move is a no-op that
    /// returns 0; callers are expected to have checked legality already.
    pub fn apply(&self, board: &mut Board, position: Position, player: Color) -> usize {
        let flips = self.flips(board, position, player);
        if flips.is_empty() {
            return 0;
        }

        board.set_piece(position, Piece::from(player));
        for &captured in &flips {
            board.set_piece(captured, Piece::from(player));
        }

        trace!(%position, %player, flipped = flips.len(), "applied move");
        flips.len()
    }

    /// Apply a move processing directions one at a time in `order`, each
    /// scanning the board as left by the previous ones.
    pub(crate) fn apply_in_order(
        &self,
        board: &mut Board,
        position: Position,
        player: Color,
        order: &[Direction],
    ) -> usize {
        if !self.is_legal(board, position, player) {
            return 0;
        }

        board.set_piece(position, Piece::from(player));
        let mut flipped = 0;
        for &dir in order {
            if let Some(run) = self.capture_run(board, position, player, dir) {
                for &captured in &run {
                    board.set_piece(captured, Piece::from(player));
                }
                flipped += run.len();
            }
        }
        flipped
    }

    /// Legal moves for `player` in row-major order.
    #[must_use]
    pub fn legal_moves(&self, board: &Board, player: Color) -> Vec<Position> {
        board
            .cells()
            .map(|cell| cell.position())
            .filter(|&position| self.is_legal(board, position, player))
            .collect()
    }

    /// First legal move for `player` in row-major order.
    #[must_use]
    pub fn first_legal_move(&self, board: &Board, player: Color) -> Option<Position> {
        board
            .cells()
            .map(|cell| cell.position())
            .find(|&position| self.is_legal(board, position, player))
    }

    #[must_use]
    pub fn has_legal_move(&self, board: &Board, player: Color) -> bool {
        self.first_legal_move(board, player).is_some()
    }
}
