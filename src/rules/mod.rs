//! Game rules: pair evaluation, turn order, scoring and the winner check.
//!
//! A player keeps the turn after a match and loses it after a mismatch.
//! The engine reports the outcome; the host decides when to pass the turn so
//! it can show the mismatched cards first.

pub mod engine;
pub mod view;

pub use engine::{GameEngine, GameResult, PairOutcome};
pub use view::BoardView;
