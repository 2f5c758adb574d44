//! Position index of a secret word.
//!
//! Built once per session. Maps each folded character to the positions where
//! it occurs, and records whitespace positions separately since those are
//! never hidden.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::mask::RevealMask;
use crate::types::{SecretWord, fold};

/// Immutable character → positions mapping of a secret word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterIndex {
    positions: BTreeMap<char, Vec<usize>>,
    whitespace: Vec<usize>,
    chars: Vec<char>,
}

impl CharacterIndex {
    /// Positions where `c` occurs (case-insensitive). Empty if absent.
    pub fn positions(&self, c: char) -> &[usize] {
        self.positions
            .get(&fold(c))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if `c` occurs in the word (case-insensitive).
    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&fold(c))
    }

    /// Distinct folded characters of the word, in sorted order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.positions.keys().copied()
    }

    /// Number of distinct guessable characters.
    pub fn distinct_letters(&self) -> usize {
        self.positions.len()
    }

    /// Positions holding whitespace.
    pub fn whitespace(&self) -> &[usize] {
        &self.whitespace
    }

    /// Characters of the word in original case.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the word has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Derives the index and the starting mask from a secret word.
pub struct SecretWordIndexer;

impl SecretWordIndexer {
    /// Indexes `word`.
    ///
    /// Whitespace is copied into the mask verbatim; every other position
    /// starts hidden.
    #[instrument(skip(word))]
    pub fn index(word: &SecretWord) -> (CharacterIndex, RevealMask) {
        let chars: Vec<char> = word.text().chars().collect();
        let mut positions: BTreeMap<char, Vec<usize>> = BTreeMap::new();
        let mut whitespace = Vec::new();

        for (i, &c) in chars.iter().enumerate() {
            if c.is_whitespace() {
                whitespace.push(i);
            } else {
                positions.entry(fold(c)).or_default().push(i);
            }
        }

        debug!(
            len = chars.len(),
            distinct = positions.len(),
            whitespace = whitespace.len(),
            "Indexed secret word"
        );

        let mask = RevealMask::hidden(&chars);
        let index = CharacterIndex {
            positions,
            whitespace,
            chars,
        };
        (index, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_are_case_insensitive() {
        let word = SecretWord::new("Banana").unwrap();
        let (index, _) = SecretWordIndexer::index(&word);
        assert_eq!(index.positions('a'), &[1, 3, 5]);
        assert_eq!(index.positions('B'), &[0]);
        assert_eq!(index.positions('z'), &[] as &[usize]);
        assert_eq!(index.letters().collect::<Vec<_>>(), vec!['a', 'b', 'n']);
    }

    #[test]
    fn test_every_position_covered_once() {
        let word = SecretWord::new("two  Words").unwrap();
        let (index, _) = SecretWordIndexer::index(&word);

        let mut seen = vec![0; index.len()];
        for letter in index.letters() {
            for &i in index.positions(letter) {
                seen[i] += 1;
            }
        }
        for &i in index.whitespace() {
            seen[i] += 1;
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_whitespace_pre_revealed() {
        let word = SecretWord::new("two words").unwrap();
        let (index, mask) = SecretWordIndexer::index(&word);
        assert_eq!(index.whitespace(), &[3]);
        assert!(!index.contains(' '));
        assert_eq!(mask.to_string(), "___ _____");
    }
}
