//! Card-by-card turn driver.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Symbol;
use crate::core::{GameError, Position};
use crate::rules::{GameEngine, GameResult, PairOutcome};

/// What happened when a card was flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// The card is matched or already face up; nothing changed.
    Ignored,
    /// First card of the turn is now face up.
    Revealed { position: Position, symbol: Symbol },
    /// Second card is face up and the pair has been evaluated.
    PairFlipped {
        first: Position,
        second: Position,
        /// Symbol on the second card.
        symbol: Symbol,
        outcome: PairOutcome,
    },
}

/// Drives a game one flip at a time.
///
/// Tracks which cards are face up during a turn, the state the engine
/// leaves to its host. After the second flip the pair stays face up until
/// the host calls [`settle`](Self::settle), typically after a short delay.
#[derive(Clone, Debug)]
pub struct Session {
    engine: GameEngine,
    face_up: SmallVec<[Position; 2]>,
    pending: Option<PairOutcome>,
}

impl Session {
    /// Wrap a freshly started game.
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            face_up: SmallVec::new(),
            pending: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    /// Cards turned face up this turn.
    #[must_use]
    pub fn face_up(&self) -> &[Position] {
        &self.face_up
    }

    /// Whether a flipped pair is waiting for [`settle`](Self::settle).
    #[must_use]
    pub fn is_awaiting_settle(&self) -> bool {
        self.pending.is_some()
    }

    /// Cards that are neither matched nor face up.
    #[must_use]
    pub fn hidden_positions(&self) -> Vec<Position> {
        self.engine
            .unmatched_positions()
            .into_iter()
            .filter(|p| !self.face_up.contains(p))
            .collect()
    }

    /// Whether the computer should move now.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.pending.is_none() && self.engine.is_computer_turn()
    }

    /// Turn the card at `position` face up.
    pub fn flip(&mut self, position: Position) -> Result<FlipOutcome, GameError> {
        if self.engine.is_finished() {
            return Err(GameError::GameOver);
        }
        if self.pending.is_some() {
            return Err(GameError::TurnInProgress);
        }
        let symbol = self.engine.card_value(position)?;
        if self.engine.is_matched(position) || self.face_up.contains(&position) {
            return Ok(FlipOutcome::Ignored);
        }

        self.face_up.push(position);
        if self.face_up.len() < 2 {
            return Ok(FlipOutcome::Revealed { position, symbol });
        }

        let (first, second) = (self.face_up[0], self.face_up[1]);
        let outcome = match self.engine.evaluate_pair(first, second) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.face_up.pop();
                return Err(err);
            }
        };
        self.pending = Some(outcome);
        Ok(FlipOutcome::PairFlipped {
            first,
            second,
            symbol,
            outcome,
        })
    }

    /// Finish the turn after both cards were shown.
    ///
    /// Matched cards stay revealed; mismatched cards go face down and the
    /// turn passes. Returns the result once the last pair is found. Does
    /// nothing if no pair is waiting.
    pub fn settle(&mut self) -> Result<Option<GameResult>, GameError> {
        if let Some(outcome) = self.pending.take() {
            self.face_up.clear();
            if outcome == PairOutcome::NoMatch {
                self.engine.switch_turn()?;
            }
        }
        Ok(self.engine.check_winner())
    }

    /// Let the computer flip its two cards.
    ///
    /// The pair is left face up; call [`settle`](Self::settle) afterwards as
    /// for a human turn.
    pub fn play_computer_turn(&mut self) -> Result<(FlipOutcome, FlipOutcome), GameError> {
        if self.pending.is_some() || !self.face_up.is_empty() {
            return Err(GameError::TurnInProgress);
        }
        if !self.engine.is_computer_turn() {
            return Err(GameError::NotComputerTurn);
        }

        let hidden = self.hidden_positions();
        let (first, second) = self.engine.computer_choose_move(&hidden)?;
        Ok((self.flip(first)?, self.flip(second)?))
    }
}
