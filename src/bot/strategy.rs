//! Bot move selection.
//!
//! Strategies are trait-based so a caller can swap in a stronger player
//! without touching turn control:
//! - `FirstLegalMove`: the first legal move in row-major order
//! - `RandomMove`: a uniformly random legal move from a seeded stream

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::core::{Color, Position};
use crate::rules::RuleEngine;

/// Policy for choosing the bot's move.
pub trait BotStrategy: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Pick a move for `player`, `None` if there is no legal move.
    ///
    /// Implementations must only return positions that are legal for
    /// `player` on `board`.
    fn choose(&mut self, board: &Board, player: Color) -> Option<Position>;
}

/// Plays the first legal move found scanning east along each row from the
/// top-left corner, then south to the next row.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalMove;

impl BotStrategy for FirstLegalMove {
    fn name(&self) -> &str {
        "first-legal"
    }

    fn choose(&mut self, board: &Board, player: Color) -> Option<Position> {
        RuleEngine::new().first_legal_move(board, player)
    }
}

/// Uniform choice among legal moves.
///
/// Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomMove {
    rng: ChaCha8Rng,
}

impl RandomMove {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl BotStrategy for RandomMove {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, board: &Board, player: Color) -> Option<Position> {
        let moves = RuleEngine::new().legal_moves(board, player);
        moves.choose(&mut self.rng).copied()
    }
}
