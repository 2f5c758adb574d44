//! Hint pool invariant: the pool is exactly the letters still hidden.

use std::collections::BTreeSet;

use super::Invariant;
use crate::GameSession;
use crate::hints::MAX_HINTS;
use crate::ledger::GuessKind;

/// Invariant: the hint pool holds the distinct letters that still have a
/// hidden position, and no more than [`MAX_HINTS`] hints were spent.
pub struct HintPoolInvariant;

impl Invariant<GameSession> for HintPoolInvariant {
    fn holds(game: &GameSession) -> bool {
        let index = game.index();
        let mask = game.mask();
        let hidden: BTreeSet<char> = index
            .letters()
            .filter(|&letter| index.positions(letter).iter().any(|&i| mask.is_hidden(i)))
            .collect();

        let hints_in_ledger = game
            .ledger()
            .entries()
            .iter()
            .filter(|g| g.kind == GuessKind::Hint)
            .count();

        let hints = game.hints();
        *hints.pool() == hidden
            && hints.hints_used() <= MAX_HINTS
            && hints.hints_used() == hints_in_ledger
    }

    fn description() -> &'static str {
        "Hint pool equals unrevealed letters and hints stay within budget"
    }
}
