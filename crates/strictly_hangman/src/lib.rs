//! Strictly Hangman - word-guessing game engine
//!
//! Pure game logic for one hangman session: which positions a guess
//! reveals, whether a hint may be granted, and when the game ends.
//! No I/O happens here; transport, dictionaries and drawing are the
//! caller's business.
//!
//! # Architecture
//!
//! - **Indexer**: position index and starting mask of the secret word
//! - **Mask / Ledger / Budget / Hints**: the four pieces of mutable state
//! - **Session**: the state machine owning them, with a render boundary
//! - **Invariants / Contracts**: properties checked after every mutation
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{GameSession, LetterOutcome, SecretWord, SessionState};
//!
//! # fn main() -> Result<(), strictly_hangman::SessionError> {
//! let mut game = GameSession::start(SecretWord::new("apple")?, 6)?;
//! let t = game.guess_letter('a');
//! assert_eq!(t.outcome, LetterOutcome::Correct { letter: 'a', revealed: 1 });
//! assert_eq!(game.mask().spaced(), "a _ _ _ _");
//! assert_eq!(t.state, SessionState::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod action;
mod budget;
mod contracts;
mod hints;
mod indexer;
mod invariants;
mod ledger;
mod mask;
mod phases;
mod session;
mod snapshot;
mod types;

// Crate-level exports - Outcomes and errors
pub use action::{
    HintOutcome, LetterOutcome, NotAccepting, SessionError, StopOutcome, Transition, WordOutcome,
};

// Crate-level exports - Session state
pub use budget::FailBudget;
pub use hints::{HintAdvisor, HintPolicy, MAX_HINTS, RandomHints};
pub use indexer::{CharacterIndex, SecretWordIndexer};
pub use ledger::{Guess, GuessKind, GuessLedger, Verdict};
pub use mask::RevealMask;
pub use phases::SessionState;
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
pub use types::{HIDDEN, SecretWord, fold, fold_str};

// Crate-level exports - Invariants and contracts
pub use contracts::{Contract, Progress, SessionContract};
pub use invariants::{
    CoverageInvariant, FailBudgetInvariant, HintPoolInvariant, Invariant, InvariantSet,
    InvariantViolation, NoRepeatInvariant, SessionInvariants,
};
