//! Remembered card positions.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::Symbol;
use crate::core::Position;

/// Positions remembered for one symbol. A symbol has at most two cards.
pub type Sightings = SmallVec<[Position; 2]>;

/// Cards that have been seen face up but not yet matched, grouped by symbol.
///
/// ## Invariants
///
/// - No position is stored twice.
/// - A symbol with no remembered positions has no entry.
/// - Matched cards are forgotten, so no entry holds a matched position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardMemory {
    seen: FxHashMap<Symbol, Sightings>,
}

impl CardMemory {
    /// Create an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember that the card at `position` shows `symbol`.
    ///
    /// Returns `false` if the position was already remembered.
    pub fn record(&mut self, position: Position, symbol: Symbol) -> bool {
        let sightings = self.seen.entry(symbol).or_default();
        if sightings.contains(&position) {
            return false;
        }
        sightings.push(position);
        true
    }

    /// Forget the card at `position`, dropping its symbol's entry when empty.
    pub fn forget(&mut self, position: Position) {
        self.seen.retain(|_, sightings| {
            sightings.retain(|p| *p != position);
            !sightings.is_empty()
        });
    }

    /// Positions remembered for `symbol`.
    #[must_use]
    pub fn sightings(&self, symbol: Symbol) -> &[Position] {
        self.seen.get(&symbol).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Whether the card at `position` is remembered.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.seen.values().any(|s| s.contains(&position))
    }

    /// A pair of remembered cards showing the same symbol.
    ///
    /// When several pairs are known, the one with the lowest symbol wins so
    /// the choice does not depend on hash order.
    #[must_use]
    pub fn known_pair(&self) -> Option<(Position, Position)> {
        self.known_pair_where(|_| true)
    }

    /// Like [`known_pair`](Self::known_pair), but only considers positions
    /// accepted by `available`.
    pub fn known_pair_where(
        &self,
        mut available: impl FnMut(&Position) -> bool,
    ) -> Option<(Position, Position)> {
        let mut best: Option<(Symbol, Position, Position)> = None;

        for (&symbol, sightings) in &self.seen {
            if best.is_some_and(|(s, _, _)| s < symbol) {
                continue;
            }
            let mut usable = sightings.iter().copied().filter(|p| available(p));
            if let (Some(first), Some(second)) = (usable.next(), usable.next()) {
                best = Some((symbol, first, second));
            }
        }

        best.map(|(_, first, second)| (first, second))
    }

    /// Number of remembered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.values().map(|s| s.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Iterate over (symbol, positions) entries.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[Position])> {
        self.seen.iter().map(|(&symbol, s)| (symbol, s.as_slice()))
    }
}
