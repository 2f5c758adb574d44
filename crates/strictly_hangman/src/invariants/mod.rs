//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every operation.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        collect(violations)
    }
}

pub mod coverage;
pub mod fail_budget;
pub mod hint_pool;
pub mod no_repeat;

pub use coverage::CoverageInvariant;
pub use fail_budget::FailBudgetInvariant;
pub use hint_pool::HintPoolInvariant;
pub use no_repeat::NoRepeatInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    CoverageInvariant,
    NoRepeatInvariant,
    FailBudgetInvariant,
    HintPoolInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, SecretWord};

    fn session(word: &str) -> GameSession {
        GameSession::start_with_policy(SecretWord::new(word).unwrap(), 6, |_: &[char]| 0usize)
            .unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&session("two words")).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_play() {
        let mut game = session("mississippi");
        game.guess_letter('s');
        game.guess_letter('z');
        game.request_hint();
        game.guess_word("misissippis");
        game.guess_word("mississipp");
        assert!(SessionInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = session("apple");
        game.guess_letter('a');
        game.guess_letter('z');

        // Hide the revealed cell and refund the failure behind the ledger's back
        game.mask = crate::indexer::SecretWordIndexer::index(game.word()).1;
        game.budget = crate::budget::FailBudget::new(6).unwrap();

        let violations = SessionInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
    }
}
