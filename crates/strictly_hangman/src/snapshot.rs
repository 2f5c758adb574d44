//! Serializable read model of a session, handed to renderers.

use serde::{Deserialize, Serialize};

use crate::ledger::Guess;
use crate::phases::SessionState;
use crate::session::GameSession;

/// Everything a renderer needs to draw a session.
///
/// The secret and its definition are only filled in once the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Mask with hidden cells as `_`.
    pub masked: String,
    /// Mask with a space between cells.
    pub masked_spaced: String,
    /// Guesses in the order they were made.
    pub guesses: Vec<Guess>,
    /// Failures so far.
    pub fail_count: usize,
    /// Failure bound.
    pub max_fails: usize,
    /// Hints spent.
    pub hints_used: usize,
    /// Hints left.
    pub hints_remaining: usize,
    /// Lifecycle state.
    pub state: SessionState,
    /// The secret word, once terminal.
    pub secret: Option<String>,
    /// The definition, once terminal.
    pub definition: Option<String>,
}

impl SessionSnapshot {
    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }
}

impl From<&GameSession> for SessionSnapshot {
    fn from(game: &GameSession) -> Self {
        let over = game.state().is_terminal();
        Self {
            masked: game.mask().to_string(),
            masked_spaced: game.mask().spaced(),
            guesses: game.ledger().entries().to_vec(),
            fail_count: game.budget().fail_count(),
            max_fails: game.budget().max_fails(),
            hints_used: game.hints().hints_used(),
            hints_remaining: game.hints().hints_remaining(),
            state: game.state(),
            secret: over.then(|| game.word().text().clone()),
            definition: over.then(|| game.word().definition().clone()).flatten(),
        }
    }
}

impl GameSession {
    /// Takes a read-only snapshot for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }
}
