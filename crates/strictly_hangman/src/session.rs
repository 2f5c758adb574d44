//! Game session: one secret word, its guesses, hints and fail budget.
//!
//! A session is single-writer. Every mutation goes through the operations
//! here; each one is refused while a redraw is in flight or once the game
//! has ended, and re-evaluates the lifecycle state when it is applied.

use tracing::{debug, info, instrument, warn};

use crate::action::{
    HintOutcome, LetterOutcome, NotAccepting, SessionError, StopOutcome, Transition, WordOutcome,
};
use crate::budget::FailBudget;
use crate::contracts::{Contract, SessionContract};
use crate::hints::{HintAdvisor, HintPolicy, RandomHints};
use crate::indexer::{CharacterIndex, SecretWordIndexer};
use crate::ledger::{GuessKind, GuessLedger, Verdict};
use crate::mask::RevealMask;
use crate::phases::SessionState;
use crate::types::{SecretWord, fold};

/// A single game of hangman.
pub struct GameSession {
    pub(crate) word: SecretWord,
    pub(crate) index: CharacterIndex,
    pub(crate) mask: RevealMask,
    pub(crate) ledger: GuessLedger,
    pub(crate) hints: HintAdvisor,
    pub(crate) budget: FailBudget,
    pub(crate) state: SessionState,
    busy: bool,
    policy: Box<dyn HintPolicy>,
}

impl GameSession {
    /// Starts a session with random hint selection.
    #[instrument(skip(word), fields(len = word.char_count()))]
    pub fn start(word: SecretWord, max_fails: usize) -> Result<Self, SessionError> {
        Self::start_with_policy(word, max_fails, RandomHints::new())
    }

    /// Starts a session with a custom hint policy.
    #[instrument(skip(word, policy), fields(len = word.char_count()))]
    pub fn start_with_policy(
        word: SecretWord,
        max_fails: usize,
        policy: impl HintPolicy + 'static,
    ) -> Result<Self, SessionError> {
        let budget = FailBudget::new(max_fails)?;
        let (index, mask) = SecretWordIndexer::index(&word);
        let hints = HintAdvisor::new(&index);

        info!(
            max_fails,
            distinct_letters = index.distinct_letters(),
            "Starting game session"
        );

        Ok(Self {
            word,
            index,
            mask,
            ledger: GuessLedger::new(),
            hints,
            budget,
            state: SessionState::InProgress,
            busy: false,
            policy: Box::new(policy),
        })
    }

    // ─────────────────────────────────────────────────────────────
    //  Player operations
    // ─────────────────────────────────────────────────────────────

    /// Guesses a single letter.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn guess_letter(&mut self, c: char) -> Transition<LetterOutcome> {
        if let Err(reason) = SessionContract::pre(self) {
            debug!(%reason, "Letter guess refused");
            return self.transition(LetterOutcome::NotAccepting(reason));
        }
        if c.is_whitespace() {
            return self.transition(LetterOutcome::NotALetter { ch: c });
        }

        let letter = fold(c);
        let text = c.to_string();
        if self.ledger.contains(&text) {
            debug!(%letter, "Duplicate letter guess");
            return self.transition(LetterOutcome::Duplicate { letter });
        }

        let before = SessionContract::capture(self);
        let outcome = if self.index.contains(letter) {
            self.ledger.record(&text, GuessKind::Letter, Verdict::Correct);
            let revealed = self.reveal_letter(letter);
            LetterOutcome::Correct { letter, revealed }
        } else {
            self.ledger.record(&text, GuessKind::Letter, Verdict::Incorrect);
            self.budget.record_failure();
            LetterOutcome::Incorrect { letter }
        };
        debug!(?outcome, "Letter guess applied");

        self.settle();
        self.verify(&before);
        self.transition(outcome)
    }

    /// Guesses the whole word.
    ///
    /// A guess whose length differs from the secret is refused without being
    /// recorded or counted as a failure.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn guess_word(&mut self, guess: &str) -> Transition<WordOutcome> {
        if let Err(reason) = SessionContract::pre(self) {
            debug!(%reason, "Word guess refused");
            return self.transition(WordOutcome::NotAccepting(reason));
        }
        if self.ledger.contains(guess) {
            debug!("Duplicate word guess");
            return self.transition(WordOutcome::Duplicate);
        }

        let expected = self.word.char_count();
        let actual = guess.chars().count();
        if actual != expected {
            debug!(expected, actual, "Word guess has wrong length");
            return self.transition(WordOutcome::InvalidLength { expected, actual });
        }

        let before = SessionContract::capture(self);
        let outcome = if self.word.matches(guess) {
            self.ledger.record(guess, GuessKind::Word, Verdict::Correct);
            self.mask.reveal_all(self.index.chars());
            self.hints.clear();
            WordOutcome::Correct
        } else {
            self.ledger.record(guess, GuessKind::Word, Verdict::Incorrect);
            self.budget.record_failure();
            WordOutcome::Incorrect
        };
        debug!(?outcome, "Word guess applied");

        self.settle();
        self.verify(&before);
        self.transition(outcome)
    }

    /// Gives away one hidden letter without touching the fail budget.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn request_hint(&mut self) -> Transition<HintOutcome> {
        if let Err(reason) = SessionContract::pre(self) {
            debug!(%reason, "Hint refused");
            return self.transition(HintOutcome::NotAccepting(reason));
        }
        if let Some(refusal) = self.hints.refusal() {
            debug!(?refusal, "Hint refused");
            return self.transition(refusal);
        }

        let before = SessionContract::capture(self);
        let Some(letter) = self.hints.draw(&mut *self.policy) else {
            return self.transition(HintOutcome::Exhausted);
        };
        self.ledger
            .record(&letter.to_string(), GuessKind::Hint, Verdict::Correct);
        let revealed = self.reveal_letter(letter);
        debug!(%letter, revealed, hints_used = self.hints.hints_used(), "Hint applied");

        self.settle();
        self.verify(&before);
        self.transition(HintOutcome::Revealed { letter, revealed })
    }

    /// Forfeits the game.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn stop(&mut self) -> Transition<StopOutcome> {
        if let Err(reason) = SessionContract::pre(self) {
            debug!(%reason, "Stop refused");
            return self.transition(StopOutcome::NotAccepting(reason));
        }
        self.state = SessionState::Forfeited;
        info!(fail_count = self.budget.fail_count(), "Game forfeited");
        self.transition(StopOutcome::Forfeited)
    }

    // ─────────────────────────────────────────────────────────────
    //  Render boundary
    // ─────────────────────────────────────────────────────────────

    /// Marks a redraw as started. Mutations are refused until it ends.
    #[instrument(skip(self))]
    pub fn begin_render(&mut self) -> Result<(), SessionError> {
        if self.busy {
            warn!("begin_render while a redraw is in flight");
            return Err(SessionError::RenderInFlight);
        }
        self.busy = true;
        Ok(())
    }

    /// Acknowledges a completed redraw.
    #[instrument(skip(self))]
    pub fn end_render(&mut self) -> Result<(), SessionError> {
        if !self.busy {
            warn!("end_render without a redraw in flight");
            return Err(SessionError::NoRenderInFlight);
        }
        self.busy = false;
        Ok(())
    }

    /// Acknowledges a failed redraw. Game state is left as it was.
    #[instrument(skip(self))]
    pub fn fail_render(&mut self) {
        if self.busy {
            warn!("Redraw failed; accepting actions again");
        }
        self.busy = false;
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// The secret word.
    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    /// Position index of the secret word.
    pub fn index(&self) -> &CharacterIndex {
        &self.index
    }

    /// The player-visible mask.
    pub fn mask(&self) -> &RevealMask {
        &self.mask
    }

    /// Every recorded guess.
    pub fn ledger(&self) -> &GuessLedger {
        &self.ledger
    }

    /// Hint pool and usage.
    pub fn hints(&self) -> &HintAdvisor {
        &self.hints
    }

    /// Fail budget.
    pub fn budget(&self) -> &FailBudget {
        &self.budget
    }

    /// Lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true while a redraw is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns true if the session would apply a mutation right now.
    pub fn is_accepting(&self) -> bool {
        SessionContract::pre(self).is_ok()
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Reveals every position of `letter` and drops it from the hint pool.
    fn reveal_letter(&mut self, letter: char) -> usize {
        let revealed = self
            .mask
            .reveal(self.index.chars(), self.index.positions(letter));
        self.hints.remove(letter);
        revealed
    }

    /// Re-evaluates the lifecycle state after a mutation.
    fn settle(&mut self) {
        let next = if self.mask.spells(self.index.chars()) {
            SessionState::Won
        } else if self.budget.is_exhausted() {
            SessionState::Lost
        } else {
            SessionState::InProgress
        };

        if next != self.state {
            info!(
                from = %self.state,
                to = %next,
                guesses = self.ledger.len(),
                fail_count = self.budget.fail_count(),
                "Session state changed"
            );
            self.state = next;
        }
    }

    #[cfg(debug_assertions)]
    fn verify(&self, before: &<SessionContract as Contract<GameSession>>::Snapshot) {
        let result = SessionContract::post(before, self);
        if let Err(violations) = &result {
            tracing::error!(?violations, "Session postcondition failed");
        }
        debug_assert!(result.is_ok(), "Session postcondition failed: {result:?}");
    }

    #[cfg(not(debug_assertions))]
    fn verify(&self, _before: &<SessionContract as Contract<GameSession>>::Snapshot) {}

    fn transition<O>(&self, outcome: O) -> Transition<O> {
        Transition::new(outcome, self.state)
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("mask", &self.mask.to_string())
            .field("ledger", &self.ledger)
            .field("hints", &self.hints)
            .field("budget", &self.budget)
            .field("state", &self.state)
            .field("busy", &self.busy)
            .finish_non_exhaustive()
    }
}

/// Reason the session refuses mutations, if it does.
pub(crate) fn refusal(session: &GameSession) -> Option<NotAccepting> {
    if session.busy {
        Some(NotAccepting::Busy)
    } else if session.state.is_terminal() {
        Some(NotAccepting::Finished(session.state))
    } else {
        None
    }
}
