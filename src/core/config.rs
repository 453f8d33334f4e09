//! Game configuration types.
//!
//! A presentation layer picks these at game start:
//! - `GameMode`: two humans, or a human against a bot of a given color
//! - `GameConfig`: the mode plus which color opens
//!
//! Menus and persistence of these choices live outside the engine.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Who is sitting at the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Both sides play through `play_move`.
    #[default]
    HumanVsHuman,
    /// The given color is driven by `bot_move_if_needed`.
    HumanVsBot { bot: Color },
}

impl GameMode {
    /// Color assigned to the bot when the caller does not name one.
    pub const DEFAULT_BOT_COLOR: Color = Color::White;

    /// Build a mode from the presentation layer's menu choice.
    ///
    /// `bot_color` is ignored when `vs_bot` is false.
    #[must_use]
    pub fn from_choice(vs_bot: bool, bot_color: Option<Color>) -> Self {
        if vs_bot {
            GameMode::HumanVsBot {
                bot: bot_color.unwrap_or(Self::DEFAULT_BOT_COLOR),
            }
        } else {
            GameMode::HumanVsHuman
        }
    }

    /// The bot's color, if there is a bot.
    #[must_use]
    pub const fn bot_color(self) -> Option<Color> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsBot { bot } => Some(bot),
        }
    }

    /// True if `player` is driven by the bot.
    #[must_use]
    pub fn is_bot(self, player: Color) -> bool {
        self.bot_color() == Some(player)
    }
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human/bot seating.
    pub mode: GameMode,

    /// Color that moves first (Black in a standard game).
    pub first_player: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            first_player: Color::Black,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration: two humans, Black first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Play against a bot of the given color.
    #[must_use]
    pub fn vs_bot(self, bot: Color) -> Self {
        self.with_mode(GameMode::HumanVsBot { bot })
    }

    /// Set the opening color.
    #[must_use]
    pub fn with_first_player(mut self, color: Color) -> Self {
        self.first_player = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.first_player, Color::Black);
        assert_eq!(config, GameConfig::new());
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .vs_bot(Color::Black)
            .with_first_player(Color::White);

        assert_eq!(config.mode, GameMode::HumanVsBot { bot: Color::Black });
        assert_eq!(config.first_player, Color::White);
    }

    #[test]
    fn test_mode_from_choice() {
        assert_eq!(GameMode::from_choice(false, None), GameMode::HumanVsHuman);
        assert_eq!(
            GameMode::from_choice(false, Some(Color::Black)),
            GameMode::HumanVsHuman
        );
        assert_eq!(
            GameMode::from_choice(true, None),
            GameMode::HumanVsBot { bot: Color::White }
        );
        assert_eq!(
            GameMode::from_choice(true, Some(Color::Black)),
            GameMode::HumanVsBot { bot: Color::Black }
        );
    }

    #[test]
    fn test_is_bot() {
        let mode = GameMode::HumanVsBot { bot: Color::White };
        assert!(mode.is_bot(Color::White));
        assert!(!mode.is_bot(Color::Black));
        assert!(!GameMode::HumanVsHuman.is_bot(Color::White));
        assert_eq!(GameMode::HumanVsHuman.bot_color(), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().vs_bot(Color::White);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
