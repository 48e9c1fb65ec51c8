//! Perfect-recall move selection.

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::{GameError, GameRng, Position};
use crate::memory::CardMemory;

/// The computer's move heuristic.
///
/// 1. If memory holds both cards of a symbol, take that pair.
/// 2. Otherwise flip a random hidden card and remember it. If its partner is
///    already remembered, take the partner.
/// 3. Otherwise flip a second random hidden card, different from the first.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecallPolicy;

impl RecallPolicy {
    /// Choose two distinct cards from `hidden`.
    ///
    /// Records the first random pick into `memory`.
    pub fn choose(
        &self,
        board: &Board,
        memory: &mut CardMemory,
        hidden: &[Position],
        rng: &mut GameRng,
    ) -> Result<(Position, Position), GameError> {
        let mut seen = FxHashSet::default();
        let mut candidates = Vec::with_capacity(hidden.len());
        for &position in hidden {
            board.check_bounds(position)?;
            if seen.insert(position) {
                candidates.push(position);
            }
        }
        if candidates.len() < 2 {
            return Err(GameError::NotEnoughHiddenCards(candidates.len()));
        }

        if let Some(pair) = memory.known_pair_where(|p| seen.contains(p)) {
            log::debug!("Computer recalls pair {} {}", pair.0, pair.1);
            return Ok(pair);
        }

        let first = *rng
            .choose(&candidates)
            .ok_or(GameError::NotEnoughHiddenCards(0))?;
        let symbol = board.symbol_at(first)?;
        memory.record(first, symbol);

        // Only the card just recorded can have completed a pair.
        if let Some(partner) = memory
            .sightings(symbol)
            .iter()
            .copied()
            .find(|p| *p != first && seen.contains(p))
        {
            log::debug!("Computer flipped {} and recalls its partner {}", first, partner);
            return Ok((first, partner));
        }

        let others: Vec<Position> = candidates.into_iter().filter(|p| *p != first).collect();
        let second = *rng
            .choose(&others)
            .ok_or(GameError::NotEnoughHiddenCards(1))?;
        log::debug!("Computer guesses {} {}", first, second);
        Ok((first, second))
    }
}
