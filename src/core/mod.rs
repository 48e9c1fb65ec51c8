//! Core engine types: positions, players, RNG, configuration, errors.
//!
//! These are the value types every other module builds on.

pub mod position;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use position::Position;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{BoardSize, GameConfig, COMPUTER_NAME, MAX_PAIRS};
pub use error::GameError;
