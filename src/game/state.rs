//! Turn state owned by the controller.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameConfig, GameMode};

/// Who is to move and who is at the board.
///
/// Created at game start and replaced when a new game begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player to move.
    pub current_player: Color,

    /// Human/bot seating.
    pub mode: GameMode,

    /// Moves applied so far.
    pub moves_played: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            current_player: config.first_player,
            mode: config.mode,
            moves_played: 0,
        }
    }

    /// True if the bot should move now.
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        self.mode.is_bot(self.current_player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
