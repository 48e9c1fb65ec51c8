//! Game configuration types.
//!
//! Hosts configure a game at startup by providing:
//! - `BoardSize`: rows and columns of the card grid
//! - `GameConfig`: player names, opponent kind, board size and RNG seed
//!
//! Both are plain serde values so a settings screen can store and reload them.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Name given to the second seat when playing against the computer.
pub const COMPUTER_NAME: &str = "Computer";

/// Largest number of pairs a board can hold (one distinct symbol per pair).
pub const MAX_PAIRS: usize = u16::MAX as usize + 1;

/// Dimensions of the card grid.
///
/// The number of cells must be positive and even: every symbol appears
/// exactly twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub rows: usize,
    pub cols: usize,
}

impl BoardSize {
    /// Board sizes offered by the settings screen, in cycling order.
    pub const STANDARD: [BoardSize; 8] = [
        BoardSize { rows: 4, cols: 4 },
        BoardSize { rows: 4, cols: 5 },
        BoardSize { rows: 4, cols: 6 },
        BoardSize { rows: 5, cols: 4 },
        BoardSize { rows: 5, cols: 6 },
        BoardSize { rows: 6, cols: 4 },
        BoardSize { rows: 6, cols: 5 },
        BoardSize { rows: 6, cols: 6 },
    ];

    /// Create a validated board size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        let size = Self { rows, cols };
        size.validate()?;
        Ok(size)
    }

    /// Check that the board holds a positive, even number of cards.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = GameError::InvalidDimensions {
            rows: self.rows,
            cols: self.cols,
        };
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells > 0 && cells % 2 == 0 && cells / 2 <= MAX_PAIRS => Ok(()),
            _ => Err(invalid),
        }
    }

    /// Total number of cards.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of distinct symbols (each appears twice).
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.card_count() / 2
    }

    /// The standard size after this one, wrapping around.
    ///
    /// Non-standard sizes restart the cycle at the first standard size.
    #[must_use]
    pub fn next_standard(&self) -> Self {
        let next = Self::STANDARD
            .iter()
            .position(|s| s == self)
            .map_or(0, |idx| (idx + 1) % Self::STANDARD.len());
        Self::STANDARD[next]
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::STANDARD[0]
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.rows, self.cols)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the player who moves first.
    pub first_player: String,

    /// Name of the second player (the computer when `against_computer`).
    pub second_player: String,

    /// Whether the second seat is played by the computer.
    pub against_computer: bool,

    /// Board dimensions.
    pub size: BoardSize,

    /// RNG seed. `None` draws one from entropy at game start.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: "Player 1".to_string(),
            second_player: COMPUTER_NAME.to_string(),
            against_computer: true,
            size: BoardSize::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Two human players.
    pub fn two_players(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first_player: first.into(),
            second_player: second.into(),
            against_computer: false,
            ..Self::default()
        }
    }

    /// A human against the computer.
    pub fn against_computer(first: impl Into<String>) -> Self {
        Self {
            first_player: first.into(),
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = size;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check names and board size.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.first_player.trim().is_empty() || self.second_player.trim().is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        if self.first_player == self.second_player {
            return Err(GameError::DuplicatePlayerName(self.first_player.clone()));
        }
        self.size.validate()
    }
}
