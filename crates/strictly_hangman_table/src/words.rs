//! Word source: secret words and their definitions.

use derive_getters::Getters;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use strictly_hangman::{SecretWord, SessionError};
use tracing::{debug, instrument};

/// A word with an optional definition shown once the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct WordEntry {
    /// The word to guess.
    word: String,
    /// What the word means.
    #[serde(default)]
    #[new(default)]
    definition: Option<String>,
}

impl WordEntry {
    /// Attaches a definition.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Turns the entry into a secret word for a session.
    pub fn to_secret(&self) -> Result<SecretWord, SessionError> {
        let secret = SecretWord::new(self.word.clone())?;
        Ok(match &self.definition {
            Some(definition) => secret.with_definition(definition.clone()),
            None => secret,
        })
    }
}

const BUILT_IN: &[(&str, &str)] = &[
    ("apple", "The round fruit of a tree of the rose family"),
    ("gallows", "A structure for hanging, usually of two uprights and a crosspiece"),
    ("mississippi", "The chief river of the United States"),
    ("typestate", "A type-level encoding of the states an object moves through"),
    ("borrow checker", "The part of the Rust compiler that enforces ownership rules"),
    ("quartz", "A hard mineral consisting of silica"),
    ("rhythm", "A strong, regular, repeated pattern of movement or sound"),
    ("jigsaw", "A puzzle of irregularly cut interlocking pieces"),
    ("oxygen", "A colourless, odourless reactive gas"),
    ("wizard", "A man who has magical powers"),
];

/// The words a table draws secrets from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Creates a word list from entries.
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// All entries in list order.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there is nothing to draw from.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks a random entry, or `None` for an empty list.
    #[instrument(skip(self, rng), fields(len = self.entries.len()))]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&WordEntry> {
        let entry = self.entries.choose(rng);
        debug!(picked = entry.is_some(), "Picked word");
        entry
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(
            BUILT_IN
                .iter()
                .map(|(word, definition)| WordEntry::new(word.to_string()).with_definition(*definition))
                .collect(),
        )
    }
}

impl From<Vec<WordEntry>> for WordList {
    fn from(entries: Vec<WordEntry>) -> Self {
        Self::new(entries)
    }
}
