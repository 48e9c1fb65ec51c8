//! # memory-match
//!
//! A two-player memory (concentration) card game engine.
//!
//! Cards are dealt face down in symbol pairs. Players flip two cards per
//! turn: a match scores a pair and the player goes again, a mismatch hides
//! the cards and passes the turn. The game ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **No timing**: The engine never sleeps or schedules. Hosts show the
//!    flipped cards for as long as they like, then settle the turn.
//!
//! 2. **Seedable**: One `GameRng` drives both the deal and the computer's
//!    guesses, so a seed reproduces a whole game.
//!
//! 3. **Presentation-free**: Positions are plain (row, column) values.
//!    Rendering and input belong to the host.
//!
//! ## Modules
//!
//! - `core`: Positions, players, RNG, configuration, errors
//! - `board`: Symbols and board generation
//! - `memory`: Cards the computer has seen
//! - `ai`: The computer's recall heuristic
//! - `rules`: `GameEngine`, pair outcomes, winner check, render snapshot
//! - `session`: Flip-by-flip turn driver for click-based hosts
//!
//! ## Example
//!
//! ```
//! use memory_match::{GameEngine, PairOutcome, Position};
//!
//! let mut game = GameEngine::with_seed("Alice", "Bob", false, 4, 4, 42).unwrap();
//!
//! let (a, b) = (Position::new(0, 0), Position::new(0, 1));
//! if game.evaluate_pair(a, b).unwrap() == PairOutcome::NoMatch {
//!     game.switch_turn().unwrap();
//! }
//! assert!(game.check_winner().is_none());
//! ```

pub mod core;
pub mod board;
pub mod memory;
pub mod ai;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BoardSize, GameConfig, GameError, GameRng, PlayerId, PlayerMap, Position};

pub use crate::board::{Board, Symbol};

pub use crate::memory::CardMemory;

pub use crate::ai::RecallPolicy;

pub use crate::rules::{BoardView, GameEngine, GameResult, PairOutcome};

pub use crate::session::{FlipOutcome, Session};
