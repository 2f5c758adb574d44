//! Lifecycle states of a game session.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a session.
///
/// `InProgress` is the only state that accepts mutations. The other three
/// are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Guesses and hints are accepted.
    #[strum(to_string = "in progress")]
    InProgress,
    /// Every character has been revealed.
    #[strum(to_string = "won")]
    Won,
    /// The fail budget ran out.
    #[strum(to_string = "lost")]
    Lost,
    /// The owner stopped the game.
    #[strum(to_string = "forfeited")]
    Forfeited,
}

impl SessionState {
    /// Returns true for `Won`, `Lost` and `Forfeited`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_in_progress_is_live() {
        let live: Vec<_> = SessionState::iter().filter(|s| !s.is_terminal()).collect();
        assert_eq!(live, vec![SessionState::InProgress]);
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionState::InProgress.to_string(), "in progress");
        assert_eq!(SessionState::Forfeited.to_string(), "forfeited");
    }
}
