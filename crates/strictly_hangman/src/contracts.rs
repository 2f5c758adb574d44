//! Contract-based validation for session operations.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use tracing::{instrument, warn};

use crate::action::NotAccepting;
use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::phases::SessionState;
use crate::session::{GameSession, refusal};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state)} - must hold before applying an operation
/// - Postcondition: {Q(before, after)} - must hold after applying it
pub trait Contract<S> {
    /// What the postcondition needs to remember about the state before.
    type Snapshot;

    /// Checks preconditions before applying an operation.
    fn pre(state: &S) -> Result<(), NotAccepting>;

    /// Records the parts of the state the postcondition compares against.
    fn capture(state: &S) -> Self::Snapshot;

    /// Checks postconditions after applying an operation.
    fn post(before: &Self::Snapshot, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Session Contract
// ─────────────────────────────────────────────────────────────

/// Monotone quantities of a session, captured before an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Visible cells.
    pub revealed: usize,
    /// Failures so far.
    pub fail_count: usize,
    /// Ledger entries.
    pub guesses: usize,
    /// Hints spent.
    pub hints_used: usize,
    /// Lifecycle state.
    pub state: SessionState,
}

/// Contract for every session mutation.
///
/// Preconditions:
/// - No redraw in flight
/// - Session not in a terminal state
///
/// Postconditions:
/// - All session invariants hold
/// - Revealed cells, failures, guesses and hints never decrease
/// - A terminal state never changes
pub struct SessionContract;

impl Contract<GameSession> for SessionContract {
    type Snapshot = Progress;

    fn pre(game: &GameSession) -> Result<(), NotAccepting> {
        match refusal(game) {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }

    fn capture(game: &GameSession) -> Progress {
        Progress {
            revealed: game.mask().len() - game.mask().hidden_count(),
            fail_count: game.budget().fail_count(),
            guesses: game.ledger().len(),
            hints_used: game.hints().hints_used(),
            state: game.state(),
        }
    }

    #[instrument(skip_all)]
    fn post(before: &Progress, after: &GameSession) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match SessionInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let now = Self::capture(after);
        if now.revealed < before.revealed {
            violations.push(InvariantViolation::new("Revealed cells were hidden again"));
        }
        if now.fail_count < before.fail_count {
            violations.push(InvariantViolation::new("Fail count decreased"));
        }
        if now.guesses < before.guesses {
            violations.push(InvariantViolation::new("Guesses were dropped from the ledger"));
        }
        if now.hints_used < before.hints_used {
            violations.push(InvariantViolation::new("Hint count decreased"));
        }
        if before.state.is_terminal() && now.state != before.state {
            violations.push(InvariantViolation::new("Terminal state changed"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Session postcondition violated");
            Err(violations)
        }
    }
}
