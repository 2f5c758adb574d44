//! The player-visible rendering of the secret word.

use crate::types::{HIDDEN, fold};

/// Live blanked copy of the secret word.
///
/// Same length as the word. A cell holds the original character once it is
/// revealed; hidden cells display as [`HIDDEN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    cells: Vec<Option<char>>,
}

impl RevealMask {
    /// Initial mask: whitespace copied, everything else hidden.
    pub(crate) fn hidden(chars: &[char]) -> Self {
        Self {
            cells: chars
                .iter()
                .map(|&c| c.is_whitespace().then_some(c))
                .collect(),
        }
    }

    /// Uncovers `positions` using the original characters in `source`.
    ///
    /// Returns the number of cells that were hidden before the call.
    pub(crate) fn reveal(&mut self, source: &[char], positions: &[usize]) -> usize {
        let mut uncovered = 0;
        for &i in positions {
            if let (Some(cell), Some(&c)) = (self.cells.get_mut(i), source.get(i))
                && cell.is_none()
            {
                *cell = Some(c);
                uncovered += 1;
            }
        }
        uncovered
    }

    /// Uncovers every cell.
    pub(crate) fn reveal_all(&mut self, source: &[char]) -> usize {
        let positions: Vec<usize> = (0..self.cells.len()).collect();
        self.reveal(source, &positions)
    }

    /// Returns true if the cell at `pos` is hidden.
    pub fn is_hidden(&self, pos: usize) -> bool {
        matches!(self.cells.get(pos), Some(None))
    }

    /// Number of hidden cells.
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the mask has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in order; `None` for hidden cells.
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Returns true if the mask spells `word`, ignoring case.
    pub fn spells(&self, word: &[char]) -> bool {
        self.cells.len() == word.len()
            && self
                .cells
                .iter()
                .zip(word)
                .all(|(m, &w)| m.is_some_and(|m| fold(m) == fold(w)))
    }

    /// Mask with a space between cells, e.g. `a _ _ _ _`.
    pub fn spaced(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(c.unwrap_or(HIDDEN));
        }
        out
    }
}

impl std::fmt::Display for RevealMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.cells {
            write!(f, "{}", c.unwrap_or(HIDDEN))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_reveal_counts_only_new_cells() {
        let word = chars("apple");
        let mut mask = RevealMask::hidden(&word);
        assert_eq!(mask.reveal(&word, &[1, 2]), 2);
        assert_eq!(mask.reveal(&word, &[1, 2]), 0);
        assert_eq!(mask.to_string(), "_pp__");
        assert_eq!(mask.hidden_count(), 3);
    }

    #[test]
    fn test_spaced_rendering() {
        let word = chars("apple");
        let mut mask = RevealMask::hidden(&word);
        mask.reveal(&word, &[0]);
        assert_eq!(mask.spaced(), "a _ _ _ _");
    }

    #[test]
    fn test_placeholder_character_in_word() {
        let word = chars("a_b");
        let mut mask = RevealMask::hidden(&word);
        assert!(mask.is_hidden(1));
        mask.reveal(&word, &[1]);
        assert!(!mask.is_hidden(1));
        assert_eq!(mask.hidden_count(), 2);
    }

    #[test]
    fn test_spells_after_reveal_all() {
        let word = chars("Ox");
        let mut mask = RevealMask::hidden(&word);
        assert!(!mask.spells(&word));
        assert_eq!(mask.reveal_all(&word), 2);
        assert!(mask.spells(&chars("oX")));
    }
}
