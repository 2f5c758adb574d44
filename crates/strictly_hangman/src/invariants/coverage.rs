//! Coverage invariant: the mask shows exactly what has been revealed.

use std::collections::HashSet;

use super::Invariant;
use crate::GameSession;
use crate::ledger::{GuessKind, Verdict};
use crate::types::fold;

/// Invariant: a cell is visible iff its character was revealed.
///
/// Whitespace is always visible. Any other cell is visible only if its
/// letter was guessed correctly or given as a hint, or the whole word was
/// guessed. Visible cells show the original character.
pub struct CoverageInvariant;

impl Invariant<GameSession> for CoverageInvariant {
    fn holds(game: &GameSession) -> bool {
        let mut solved = false;
        let mut letters = HashSet::new();
        for guess in game.ledger().entries() {
            if guess.verdict != Verdict::Correct {
                continue;
            }
            match guess.kind {
                GuessKind::Word => solved = true,
                GuessKind::Letter | GuessKind::Hint => {
                    letters.extend(guess.text.chars().next().map(fold));
                }
            }
        }

        let chars = game.index().chars();
        let cells = game.mask().cells();
        if chars.len() != cells.len() {
            return false;
        }

        chars.iter().zip(cells).all(|(&c, &cell)| {
            let visible = c.is_whitespace() || solved || letters.contains(&fold(c));
            if visible {
                cell == Some(c)
            } else {
                cell.is_none()
            }
        })
    }

    fn description() -> &'static str {
        "Mask cells are visible exactly when revealed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecretWord;

    fn session(word: &str) -> GameSession {
        GameSession::start_with_policy(SecretWord::new(word).unwrap(), 6, |_: &[char]| 0usize)
            .unwrap()
    }

    #[test]
    fn test_new_session_holds() {
        assert!(CoverageInvariant::holds(&session("two words")));
    }

    #[test]
    fn test_holds_through_guesses_and_hints() {
        let mut game = session("Hello World");
        assert!(CoverageInvariant::holds(&game));
        game.guess_letter('L');
        assert!(CoverageInvariant::holds(&game));
        game.request_hint();
        assert!(CoverageInvariant::holds(&game));
        game.guess_letter('q');
        assert!(CoverageInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_word_guess() {
        let mut game = session("Ox");
        game.guess_word("oX");
        assert!(CoverageInvariant::holds(&game));
        assert_eq!(game.mask().to_string(), "Ox");
    }

    #[test]
    fn test_early_reveal_violates() {
        let mut game = session("apple");
        let chars = game.index().chars().to_vec();
        game.mask.reveal(&chars, &[4]);
        assert!(!CoverageInvariant::holds(&game));
    }
}
