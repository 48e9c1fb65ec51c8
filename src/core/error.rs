//! Game error types.

use thiserror::Error;

use super::position::Position;

/// Errors raised when a caller breaks one of the engine's preconditions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Board must have a positive, even number of cells
    #[error("Invalid board dimensions {rows}x{cols}: need a positive, even number of cards")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Position does not exist on the board
    #[error("Position {position} is outside the {rows}x{cols} board")]
    PositionOutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    /// Card layout does not hold every symbol exactly twice
    #[error("Invalid card layout: {0}")]
    InvalidLayout(String),

    /// Card was already matched and removed from play
    #[error("Card at {0} is already matched")]
    AlreadyMatched(Position),

    /// Both cards of a pair are the same card
    #[error("Cannot pair the card at {0} with itself")]
    SamePosition(Position),

    /// Every pair has been found
    #[error("Game is already over")]
    GameOver,

    /// No player by this name
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    /// Player names must be non-empty
    #[error("Player name must not be empty")]
    EmptyPlayerName,

    /// Both players share a name, which would merge their scores
    #[error("Both players are named {0}")]
    DuplicatePlayerName(String),

    /// Computer needs at least two distinct hidden cards to choose from
    #[error("Computer needs at least 2 hidden cards, got {0}")]
    NotEnoughHiddenCards(usize),

    /// Computer was asked to move on a human player's turn
    #[error("It is not the computer's turn")]
    NotComputerTurn,

    /// A flipped pair is waiting to be settled
    #[error("A pair is already face up; settle it before flipping again")]
    TurnInProgress,
}
