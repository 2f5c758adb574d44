//! Record of every guess made in a session.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::fold_str;

/// How a ledger entry came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessKind {
    /// Single-letter guess by the player.
    Letter,
    /// Whole-word guess by the player.
    Word,
    /// Letter given away as a hint.
    Hint,
}

/// Whether a recorded guess was right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The guess uncovered part or all of the word.
    Correct,
    /// The guess cost a failure.
    Incorrect,
}

/// One recorded guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// The guess as submitted.
    pub text: String,
    /// How the guess came about.
    pub kind: GuessKind,
    /// Whether it was right.
    pub verdict: Verdict,
}

/// Ordered set of guesses, unique ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessLedger {
    entries: Vec<Guess>,
    keys: HashSet<String>,
}

impl GuessLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `text` was recorded before (case-insensitive).
    pub fn contains(&self, text: &str) -> bool {
        self.keys.contains(&fold_str(text))
    }

    /// Records a guess.
    ///
    /// Returns false and leaves the ledger untouched if an equal guess
    /// (ignoring case) is already present.
    pub(crate) fn record(&mut self, text: &str, kind: GuessKind, verdict: Verdict) -> bool {
        if !self.keys.insert(fold_str(text)) {
            return false;
        }
        self.entries.push(Guess {
            text: text.to_string(),
            kind,
            verdict,
        });
        true
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Guess] {
        &self.entries
    }

    /// Number of entries judged incorrect.
    pub fn incorrect_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|g| g.verdict == Verdict::Incorrect)
            .count()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
