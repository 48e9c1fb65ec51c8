//! Render-ready snapshot of a game.

use serde::{Deserialize, Serialize};

use crate::board::Symbol;
use crate::core::{PlayerId, PlayerMap};

use super::engine::{GameEngine, GameResult};

/// What a renderer needs to draw the table.
///
/// Matched cards show their symbol; every other card is `None` (face down).
/// Cards the host has flipped mid-turn are host state and are not included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells.
    pub cells: Vec<Option<Symbol>>,
    pub names: PlayerMap<String>,
    pub scores: PlayerMap<u32>,
    pub current_player: PlayerId,
    pub result: Option<GameResult>,
}

impl BoardView {
    pub(crate) fn capture(game: &GameEngine) -> Self {
        let cells = game
            .board()
            .cards()
            .map(|(position, symbol)| game.is_matched(position).then_some(symbol))
            .collect();

        Self {
            rows: game.rows(),
            cols: game.cols(),
            cells,
            names: game.names().clone(),
            scores: game.scores().clone(),
            current_player: game.current_player(),
            result: game.check_winner(),
        }
    }

    /// Cell at (row, col), `None` when face down or off the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Symbol> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Score lines in the form "Alice: 3 Pair(s)", in turn order.
    #[must_use]
    pub fn score_lines(&self) -> Vec<String> {
        self.names
            .iter()
            .map(|(player, name)| format!("{}: {} Pair(s)", name, self.scores[player]))
            .collect()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}
