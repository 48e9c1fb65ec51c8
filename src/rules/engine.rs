//! The game-state engine.
//!
//! `GameEngine` owns the board, scores, matched cards and the computer's
//! memory. It never waits: reveal delays and animations belong to the host,
//! which calls [`GameEngine::evaluate_pair`] and then, after a mismatch,
//! [`GameEngine::switch_turn`] whenever it is ready.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::ai::RecallPolicy;
use crate::board::{Board, Symbol};
use crate::core::{BoardSize, GameConfig, GameError, GameRng, PlayerId, PlayerMap, Position};
use crate::memory::CardMemory;

use super::view::BoardView;

/// Result of comparing two flipped cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairOutcome {
    /// Same symbol: both cards leave play and the current player scores.
    Match,
    /// Different symbols: both cards go face down again.
    NoMatch,
}

impl PairOutcome {
    #[must_use]
    pub fn is_match(self) -> bool {
        self == PairOutcome::Match
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player found more pairs.
    Winner {
        player: PlayerId,
        name: String,
        pairs: u32,
    },
    /// Both players found the same number of pairs.
    Tie { pairs: u32 },
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner { player: p, .. } if *p == player)
    }

    /// Pair count of the winner, or of each player on a tie.
    #[must_use]
    pub fn pairs(&self) -> u32 {
        match self {
            GameResult::Winner { pairs, .. } | GameResult::Tie { pairs } => *pairs,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner { name, pairs, .. } => write!(f, "{name} wins with {pairs} pairs!"),
            GameResult::Tie { .. } => write!(f, "It's a tie!"),
        }
    }
}

/// State of one game of memory.
///
/// Not internally synchronized: a host sharing an engine across threads must
/// wrap it in its own lock.
#[derive(Clone, Debug)]
pub struct GameEngine {
    names: PlayerMap<String>,
    against_computer: bool,
    board: Board,
    matched: FxHashSet<Position>,
    scores: PlayerMap<u32>,
    current: PlayerId,
    memory: CardMemory,
    rng: GameRng,
}

impl GameEngine {
    /// Start a game with a board shuffled from entropy.
    pub fn new(
        first_player: impl Into<String>,
        second_player: impl Into<String>,
        against_computer: bool,
        rows: usize,
        cols: usize,
    ) -> Result<Self, GameError> {
        Self::from_config(Self::config_for(
            first_player,
            second_player,
            against_computer,
            rows,
            cols,
        ))
    }

    /// Start a reproducible game: the same seed deals the same board and
    /// drives the same computer guesses.
    pub fn with_seed(
        first_player: impl Into<String>,
        second_player: impl Into<String>,
        against_computer: bool,
        rows: usize,
        cols: usize,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::from_config(
            Self::config_for(first_player, second_player, against_computer, rows, cols)
                .with_seed(seed),
        )
    }

    /// Start a game from a full configuration.
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = Board::generate(config.size, &mut rng)?;
        Ok(Self::assemble(config, board, rng))
    }

    /// Start a game on a fixed board. The board's size overrides `config.size`.
    pub fn from_board(mut config: GameConfig, board: Board) -> Result<Self, GameError> {
        config.size = board.size();
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self::assemble(config, board, rng))
    }

    fn config_for(
        first_player: impl Into<String>,
        second_player: impl Into<String>,
        against_computer: bool,
        rows: usize,
        cols: usize,
    ) -> GameConfig {
        GameConfig {
            first_player: first_player.into(),
            second_player: second_player.into(),
            against_computer,
            size: BoardSize { rows, cols },
            seed: None,
        }
    }

    fn assemble(config: GameConfig, board: Board, rng: GameRng) -> Self {
        log::info!(
            "New {} game: {} vs {}{} (seed {})",
            board.size(),
            config.first_player,
            config.second_player,
            if config.against_computer { " (computer)" } else { "" },
            rng.seed()
        );

        Self {
            names: PlayerMap::new(config.first_player, config.second_player),
            against_computer: config.against_computer,
            board,
            matched: FxHashSet::default(),
            scores: PlayerMap::with_value(0),
            current: PlayerId::FIRST,
            memory: CardMemory::new(),
            rng,
        }
    }

    // === Queries ===

    /// The dealt board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Name of the player in `player`'s seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    /// Both player names in turn order.
    #[must_use]
    pub fn names(&self) -> &PlayerMap<String> {
        &self.names
    }

    /// Seat of the player called `name`.
    pub fn player_by_name(&self, name: &str) -> Result<PlayerId, GameError> {
        self.names
            .position(|n| n == name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    #[must_use]
    pub fn is_against_computer(&self) -> bool {
        self.against_computer
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player_name(&self) -> &str {
        self.player_name(self.current)
    }

    /// Whether the computer should move now.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.against_computer && self.current == PlayerId::SECOND && !self.is_finished()
    }

    /// Symbol on the card at `position`.
    pub fn card_value(&self, position: Position) -> Result<Symbol, GameError> {
        self.board.symbol_at(position)
    }

    /// Pairs found by `player`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Pairs found by the player called `name`.
    pub fn score_of(&self, name: &str) -> Result<u32, GameError> {
        Ok(self.score(self.player_by_name(name)?))
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Whether the card at `position` has been matched.
    #[must_use]
    pub fn is_matched(&self, position: Position) -> bool {
        self.matched.contains(&position)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Cards still in play, row-major.
    #[must_use]
    pub fn unmatched_positions(&self) -> Vec<Position> {
        self.board
            .positions()
            .filter(|p| !self.matched.contains(p))
            .collect()
    }

    /// Every pair has been found.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.matched.len() == self.board.card_count()
    }

    /// The computer's memory of mismatched cards.
    #[must_use]
    pub fn memory(&self) -> &CardMemory {
        &self.memory
    }

    /// The winner once every pair is found, `None` before that.
    #[must_use]
    pub fn check_winner(&self) -> Option<GameResult> {
        if !self.is_finished() {
            return None;
        }

        let first = self.scores[PlayerId::FIRST];
        let second = self.scores[PlayerId::SECOND];
        let winner = match first.cmp(&second) {
            std::cmp::Ordering::Greater => PlayerId::FIRST,
            std::cmp::Ordering::Less => PlayerId::SECOND,
            std::cmp::Ordering::Equal => return Some(GameResult::Tie { pairs: first }),
        };

        Some(GameResult::Winner {
            player: winner,
            name: self.names[winner].clone(),
            pairs: self.scores[winner],
        })
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::capture(self)
    }

    // === Mutations ===

    /// Compare two flipped cards.
    ///
    /// On a match both cards leave play, the current player scores and the
    /// cards are forgotten. On a mismatch both cards are remembered. The turn
    /// never changes here; call [`switch_turn`](Self::switch_turn) after a
    /// mismatch.
    pub fn evaluate_pair(&mut self, a: Position, b: Position) -> Result<PairOutcome, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let symbol_a = self.board.symbol_at(a)?;
        let symbol_b = self.board.symbol_at(b)?;
        if a == b {
            return Err(GameError::SamePosition(a));
        }
        if let Some(p) = [a, b].into_iter().find(|p| self.matched.contains(p)) {
            return Err(GameError::AlreadyMatched(p));
        }

        if symbol_a != symbol_b {
            self.memory.record(a, symbol_a);
            self.memory.record(b, symbol_b);
            log::debug!(
                "{} flipped {} {} and {} {}: no match",
                self.current_player_name(),
                a,
                symbol_a,
                b,
                symbol_b
            );
            return Ok(PairOutcome::NoMatch);
        }

        self.matched.insert(a);
        self.matched.insert(b);
        self.scores[self.current] += 1;
        self.memory.forget(a);
        self.memory.forget(b);
        log::debug!(
            "{} matched {} at {} and {}",
            self.current_player_name(),
            symbol_a,
            a,
            b
        );

        if let Some(result) = self.check_winner() {
            log::info!("Game over: {}", result);
        }
        Ok(PairOutcome::Match)
    }

    /// Pass the turn to the other player. Returns the new current player.
    pub fn switch_turn(&mut self) -> Result<PlayerId, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        self.current = self.current.other();
        log::debug!("Turn passes to {}", self.current_player_name());
        Ok(self.current)
    }

    /// Pick the computer's two cards from `hidden`.
    ///
    /// `hidden` is the host's view of the cards that are neither matched nor
    /// face up. This is not a pure query: the first card of a random guess is
    /// recorded into the computer's memory.
    ///
    /// A matched card in `hidden` is rejected with
    /// [`GameError::AlreadyMatched`] before anything is picked or remembered.
    pub fn computer_choose_move(
        &mut self,
        hidden: &[Position],
    ) -> Result<(Position, Position), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if let Some(&p) = hidden.iter().find(|p| self.matched.contains(*p)) {
            return Err(GameError::AlreadyMatched(p));
        }
        RecallPolicy.choose(&self.board, &mut self.memory, hidden, &mut self.rng)
    }
}
