//! Fail budget invariant: failures are bounded and match the ledger.

use super::Invariant;
use crate::GameSession;

/// Invariant: `fail_count <= max_fails` and every failure has a ledger entry.
///
/// Refused guesses (duplicates, wrong length, whitespace) leave no entry and
/// cost nothing, so the count of incorrect entries equals the fail count.
pub struct FailBudgetInvariant;

impl Invariant<GameSession> for FailBudgetInvariant {
    fn holds(game: &GameSession) -> bool {
        let budget = game.budget();
        budget.fail_count() <= budget.max_fails()
            && budget.fail_count() == game.ledger().incorrect_count()
    }

    fn description() -> &'static str {
        "Fail count is bounded and equals incorrect guesses"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SecretWord, SessionState};

    #[test]
    fn test_holds_until_lost() {
        let mut game = GameSession::start(SecretWord::new("ox").unwrap(), 3).unwrap();
        for c in ['a', 'b', 'c', 'd'] {
            game.guess_letter(c);
            assert!(FailBudgetInvariant::holds(&game));
        }
        assert_eq!(game.state(), SessionState::Lost);
        assert_eq!(game.budget().fail_count(), 3);
    }

    #[test]
    fn test_refused_word_costs_nothing() {
        let mut game = GameSession::start(SecretWord::new("apple").unwrap(), 3).unwrap();
        game.guess_word("apples");
        game.guess_word("a");
        assert!(FailBudgetInvariant::holds(&game));
        assert_eq!(game.budget().fail_count(), 0);
    }

    #[test]
    fn test_refunded_failure_violates() {
        let mut game = GameSession::start(SecretWord::new("apple").unwrap(), 3).unwrap();
        game.guess_letter('z');
        game.budget = crate::budget::FailBudget::new(3).unwrap();
        assert!(!FailBudgetInvariant::holds(&game));
    }
}
