//! Outcomes and errors of session operations.
//!
//! Player mistakes (repeated guesses, wrong-length words, spent hints) are
//! outcomes, not errors. Only broken preconditions are errors.

use serde::{Deserialize, Serialize};

use crate::phases::SessionState;

/// Why a session refused to apply an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum NotAccepting {
    /// A redraw has started and not been acknowledged.
    #[display("a redraw is still in flight")]
    Busy,
    /// The session already reached a terminal state.
    #[display("the game is already over ({})", _0)]
    Finished(SessionState),
}

/// Result of a letter guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterOutcome {
    /// The letter occurs in the word; `revealed` positions were uncovered.
    Correct {
        /// The folded letter.
        letter: char,
        /// Number of positions uncovered.
        revealed: usize,
    },
    /// The letter does not occur in the word. Costs one failure.
    Incorrect {
        /// The folded letter.
        letter: char,
    },
    /// The letter was guessed before. No state change.
    Duplicate {
        /// The folded letter.
        letter: char,
    },
    /// Whitespace is never guessable. No state change.
    NotALetter {
        /// The rejected character.
        ch: char,
    },
    /// The session refused the guess.
    NotAccepting(NotAccepting),
}

/// Result of a whole-word guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordOutcome {
    /// The guess spells the secret word.
    Correct,
    /// Same length, wrong word. Costs one failure.
    Incorrect,
    /// The word was guessed before. No state change.
    Duplicate,
    /// Length differs from the secret. Not recorded, not counted.
    InvalidLength {
        /// Length of the secret word.
        expected: usize,
        /// Length of the guess.
        actual: usize,
    },
    /// The session refused the guess.
    NotAccepting(NotAccepting),
}

/// Result of a hint request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    /// A letter was given away.
    Revealed {
        /// The folded letter.
        letter: char,
        /// Number of positions uncovered.
        revealed: usize,
    },
    /// All hints of the session have been used.
    Exhausted,
    /// Only one unrevealed letter is left; it must be guessed.
    LastLetterProtected,
    /// The session refused the request.
    NotAccepting(NotAccepting),
}

/// Result of stopping a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopOutcome {
    /// The session is now forfeited.
    Forfeited,
    /// The session refused to stop.
    NotAccepting(NotAccepting),
}

/// An operation outcome paired with the session state after the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<O> {
    /// What the operation did.
    pub outcome: O,
    /// Lifecycle state after the operation.
    pub state: SessionState,
}

impl<O> Transition<O> {
    /// Creates a transition.
    pub fn new(outcome: O, state: SessionState) -> Self {
        Self { outcome, state }
    }

    /// Returns true if this transition ended the game.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

/// Broken precondition on a session. Signals a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The secret word has no guessable character.
    #[display("Secret word must contain at least one non-whitespace character")]
    EmptySecretWord,

    /// The fail budget must allow at least one failure.
    #[display("Fail budget must be at least 1")]
    ZeroMaxFails,

    /// `begin_render` called while a redraw is already in flight.
    #[display("A redraw is already in flight")]
    RenderInFlight,

    /// `end_render` called without a redraw in flight.
    #[display("No redraw is in flight")]
    NoRenderInFlight,
}

impl std::error::Error for SessionError {}
