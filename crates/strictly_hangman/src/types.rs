//! Core domain types for the word-guessing game.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::action::SessionError;

/// Symbol shown in place of a character that has not been revealed yet.
pub const HIDDEN: char = '_';

/// Folds a character for case-insensitive comparison.
///
/// Uses the first code point of the lowercase mapping so folding never
/// changes the length of a word.
pub fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Folds every character of a string (see [`fold`]).
pub fn fold_str(s: &str) -> String {
    s.chars().map(fold).collect()
}

/// The word or phrase the player must uncover.
///
/// Immutable once created. The text keeps its original casing for display.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SecretWord {
    /// Case-preserved display form.
    text: String,
    /// Optional dictionary definition, shown once the game is over.
    definition: Option<String>,
}

impl SecretWord {
    /// Creates a secret word without a definition.
    ///
    /// Fails with [`SessionError::EmptySecretWord`] when the text has no
    /// guessable (non-whitespace) character.
    #[instrument(skip(text))]
    pub fn new(text: impl Into<String>) -> Result<Self, SessionError> {
        let text = text.into();
        if text.chars().all(char::is_whitespace) {
            return Err(SessionError::EmptySecretWord);
        }
        Ok(Self {
            text,
            definition: None,
        })
    }

    /// Attaches a definition.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Number of characters in the word (including whitespace).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if `guess` spells the word, ignoring case.
    pub fn matches(&self, guess: &str) -> bool {
        guess.chars().count() == self.char_count()
            && guess.chars().map(fold).eq(self.text.chars().map(fold))
    }
}

impl std::fmt::Display for SecretWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_blank() {
        assert_eq!(SecretWord::new(""), Err(SessionError::EmptySecretWord));
        assert_eq!(SecretWord::new("  \t"), Err(SessionError::EmptySecretWord));
    }

    #[test]
    fn test_matches_ignores_case() {
        let word = SecretWord::new("Apple").unwrap();
        assert!(word.matches("aPPLE"));
        assert!(!word.matches("apples"));
        assert!(!word.matches("apply"));
    }

    #[test]
    fn test_fold_keeps_length() {
        assert_eq!(fold_str("İstanbul").chars().count(), 8);
        assert_eq!(fold('Q'), 'q');
    }
}
