//! Player actions parsed from chat lines, and their outcomes.

use serde::{Deserialize, Serialize};
use strictly_hangman::{
    GameSession, HintOutcome, LetterOutcome, MAX_HINTS, NotAccepting, SessionState, StopOutcome,
    Transition, WordOutcome,
};
use tracing::instrument;

/// Something a player asked for at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Guess one character.
    #[display("guess letter '{}'", _0)]
    Letter(char),
    /// Guess the whole word.
    #[display("guess word \"{}\"", _0)]
    Word(String),
    /// Ask for a hint.
    #[display("hint")]
    Hint,
    /// Give up.
    #[display("stop")]
    Stop,
}

impl PlayerAction {
    /// Parses a chat line. Blank lines yield `None`.
    ///
    /// `/hint` and `/stop` are commands, a single character is a letter guess
    /// and anything else is a word guess.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if line.eq_ignore_ascii_case("/hint") {
            return Some(Self::Hint);
        }
        if line.eq_ignore_ascii_case("/stop") {
            return Some(Self::Stop);
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self::Letter(c)),
            _ => Some(Self::Word(line.to_string())),
        }
    }

    /// Applies the action to a session.
    pub fn apply(&self, game: &mut GameSession) -> (ActionOutcome, SessionState) {
        fn split<O>(t: Transition<O>, wrap: fn(O) -> ActionOutcome) -> (ActionOutcome, SessionState) {
            (wrap(t.outcome), t.state)
        }
        match self {
            Self::Letter(c) => split(game.guess_letter(*c), ActionOutcome::Letter),
            Self::Word(w) => split(game.guess_word(w), ActionOutcome::Word),
            Self::Hint => split(game.request_hint(), ActionOutcome::Hint),
            Self::Stop => split(game.stop(), ActionOutcome::Stop),
        }
    }
}

/// Core outcome of a dispatched action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Outcome of a letter guess.
    Letter(LetterOutcome),
    /// Outcome of a word guess.
    Word(WordOutcome),
    /// Outcome of a hint request.
    Hint(HintOutcome),
    /// Outcome of a stop.
    Stop(StopOutcome),
}

impl ActionOutcome {
    /// Why the session refused the action, if it did.
    pub fn refusal(&self) -> Option<NotAccepting> {
        match self {
            Self::Letter(LetterOutcome::NotAccepting(r))
            | Self::Word(WordOutcome::NotAccepting(r))
            | Self::Hint(HintOutcome::NotAccepting(r))
            | Self::Stop(StopOutcome::NotAccepting(r)) => Some(*r),
            _ => None,
        }
    }

    /// Explanation for the player.
    pub fn message(&self) -> String {
        match self {
            Self::Letter(outcome) => match outcome {
                LetterOutcome::Correct { letter, revealed: 1 } => {
                    format!("Yes! There is one '{letter}'.")
                }
                LetterOutcome::Correct { letter, revealed } => {
                    format!("Yes! There are {revealed} '{letter}'s.")
                }
                LetterOutcome::Incorrect { letter } => format!("No '{letter}' in this word."),
                LetterOutcome::Duplicate { letter } => {
                    format!("'{letter}' was already guessed. Try another letter.")
                }
                LetterOutcome::NotALetter { .. } => "Whitespace can't be guessed.".to_string(),
                LetterOutcome::NotAccepting(reason) => refused(*reason),
            },
            Self::Word(outcome) => match outcome {
                WordOutcome::Correct => "That's the word!".to_string(),
                WordOutcome::Incorrect => "That's not the word.".to_string(),
                WordOutcome::Duplicate => "That word was already guessed.".to_string(),
                WordOutcome::InvalidLength { expected, actual } => format!(
                    "The word has {expected} characters, your guess has {actual}. No penalty."
                ),
                WordOutcome::NotAccepting(reason) => refused(*reason),
            },
            Self::Hint(outcome) => match outcome {
                HintOutcome::Revealed { letter, .. } => format!("Hint: the word contains '{letter}'."),
                HintOutcome::Exhausted => format!("All {MAX_HINTS} hints have been used."),
                HintOutcome::LastLetterProtected => {
                    "Only one letter is left. You'll have to guess it yourself.".to_string()
                }
                HintOutcome::NotAccepting(reason) => refused(*reason),
            },
            Self::Stop(outcome) => match outcome {
                StopOutcome::Forfeited => "Game stopped.".to_string(),
                StopOutcome::NotAccepting(reason) => refused(*reason),
            },
        }
    }
}

fn refused(reason: NotAccepting) -> String {
    match reason {
        NotAccepting::Busy => "Hold on, still drawing the last move.".to_string(),
        NotAccepting::Finished(state) => format!("This game is already over ({state})."),
    }
}
