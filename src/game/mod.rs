//! Game flow: turn state, turn control, and scoring.
//!
//! `TurnController` is the command/query surface a presentation layer talks
//! to. It owns one `Board` and one `GameState` and drives the `RuleEngine`.

pub mod controller;
pub mod score;
pub mod state;

pub use controller::{TurnController, TurnReport};
pub use score::{Outcome, Score};
pub use state::GameState;
