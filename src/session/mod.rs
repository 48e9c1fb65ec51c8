//! Flip-by-flip play on top of [`GameEngine`](crate::rules::GameEngine).
//!
//! Presentation layers that deal in single clicks can drive a game through
//! [`Session`] instead of pairing positions themselves.

mod turn;

pub use turn::{FlipOutcome, Session};
