//! The card grid.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::{BoardSize, GameError, GameRng, Position};

/// A rows × columns grid of face-down cards.
///
/// Every symbol appears exactly twice. The layout is fixed once the board
/// is built and cards are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Symbol>,
}

impl Board {
    /// Deal a shuffled board.
    ///
    /// Produces `size.pair_count()` distinct symbols, each twice, shuffles the
    /// whole deck with `rng` and lays it out row-major.
    pub fn generate(size: BoardSize, rng: &mut GameRng) -> Result<Self, GameError> {
        size.validate()?;

        let mut cells: Vec<Symbol> = (0..size.pair_count())
            .flat_map(|i| {
                let symbol = Symbol::new(i as u16);
                [symbol, symbol]
            })
            .collect();
        rng.shuffle(&mut cells);

        log::debug!("Dealt {} board with {} pairs", size, size.pair_count());
        Ok(Self { size, cells })
    }

    /// Build a board from a known row-major layout.
    ///
    /// Fails unless the layout fills the grid and every symbol appears
    /// exactly twice.
    pub fn from_symbols(size: BoardSize, cells: Vec<Symbol>) -> Result<Self, GameError> {
        size.validate()?;

        if cells.len() != size.card_count() {
            return Err(GameError::InvalidLayout(format!(
                "{} cards for a {} board",
                cells.len(),
                size
            )));
        }

        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for &symbol in &cells {
            *counts.entry(symbol).or_default() += 1;
        }
        if let Some((symbol, count)) = counts.iter().find(|(_, count)| **count != 2) {
            return Err(GameError::InvalidLayout(format!(
                "symbol {} appears {} times",
                symbol, count
            )));
        }

        Ok(Self { size, cells })
    }

    /// Board dimensions.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Total number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `position` lies on the board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size.rows && position.col < self.size.cols
    }

    /// Check that `position` lies on the board.
    pub fn check_bounds(&self, position: Position) -> Result<(), GameError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(GameError::PositionOutOfBounds {
                position,
                rows: self.size.rows,
                cols: self.size.cols,
            })
        }
    }

    /// Symbol on the card at `position`.
    pub fn symbol_at(&self, position: Position) -> Result<Symbol, GameError> {
        self.check_bounds(position)?;
        Ok(self.cells[position.row * self.size.cols + position.col])
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.size.cols;
        (0..self.cells.len()).map(move |i| Position::new(i / cols, i % cols))
    }

    /// (position, symbol) for every card in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = (Position, Symbol)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Every symbol, sorted. Independent of how the board was shuffled.
    #[must_use]
    pub fn sorted_symbols(&self) -> Vec<Symbol> {
        let mut symbols = self.cells.clone();
        symbols.sort_unstable();
        symbols
    }
}
