//! Board generation and card lookup.
//!
//! A board is dealt once per game from a seeded `GameRng` and never changes
//! afterwards. Which cards are matched or face up is tracked elsewhere.

mod grid;
mod symbol;

pub use grid::Board;
pub use symbol::Symbol;
