//! Reversi capture rules.
//!
//! `RuleEngine` answers legality questions and applies moves. It holds no
//! state of its own: every call reads or mutates only the board it is given.

pub mod engine;

pub use engine::{CaptureRun, FlipSet, RuleEngine};
