//! The computer player's memory of cards it has seen.
//!
//! Every mismatched card is remembered by symbol. Once both cards of a symbol
//! are remembered the computer can take the pair on its next turn.

mod recall;

pub use recall::{CardMemory, Sightings};
