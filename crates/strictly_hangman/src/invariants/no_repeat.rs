//! No-repeat invariant: the ledger never holds the same guess twice.

use std::collections::HashSet;

use super::Invariant;
use crate::GameSession;
use crate::types::fold_str;

/// Invariant: ledger entries are unique, ignoring case.
pub struct NoRepeatInvariant;

impl Invariant<GameSession> for NoRepeatInvariant {
    fn holds(game: &GameSession) -> bool {
        let mut seen = HashSet::new();
        game.ledger()
            .entries()
            .iter()
            .all(|g| seen.insert(fold_str(&g.text)))
    }

    fn description() -> &'static str {
        "Guess ledger has no repeated entries"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LetterOutcome, SecretWord, WordOutcome};

    #[test]
    fn test_repeat_guess_is_not_recorded() {
        let mut game = GameSession::start(SecretWord::new("apple").unwrap(), 6).unwrap();
        game.guess_letter('p');
        let t = game.guess_letter('P');
        assert_eq!(t.outcome, LetterOutcome::Duplicate { letter: 'p' });
        assert!(NoRepeatInvariant::holds(&game));
        assert_eq!(game.ledger().len(), 1);
    }

    #[test]
    fn test_word_repeat_in_other_case_is_not_recorded() {
        let mut game = GameSession::start(SecretWord::new("apple").unwrap(), 6).unwrap();
        game.guess_word("ample");
        let t = game.guess_word("AMPLE");
        assert_eq!(t.outcome, WordOutcome::Duplicate);
        assert_eq!(game.budget().fail_count(), 1);
        assert!(NoRepeatInvariant::holds(&game));
    }
}
