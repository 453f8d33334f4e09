//! Pluggable bot players.
//!
//! The turn controller asks a [`BotStrategy`] for a move whenever the bot's
//! color is to play, then submits it through the same path a human move
//! takes. The default strategy has no look-ahead.

pub mod strategy;

pub use strategy::{BotStrategy, FirstLegalMove, RandomMove};
