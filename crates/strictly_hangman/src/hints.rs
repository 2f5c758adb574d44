//! Hint supply: a bounded number of letters given away for free.
//!
//! The pool holds the letters of the word that are still hidden. A letter
//! leaves the pool the moment it is revealed, whichever way that happens.
//! When a single letter remains it is never handed out, so a game cannot be
//! won on hints alone.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::action::HintOutcome;
use crate::indexer::CharacterIndex;

/// Hints available per session.
pub const MAX_HINTS: usize = 3;

/// Chooses which letter a hint gives away.
///
/// Receives the candidates in sorted order and returns an index into them.
/// Out-of-range indices wrap, so a policy can never pick an illegal letter.
pub trait HintPolicy: Send {
    /// Picks one of `candidates` (never empty).
    fn choose(&mut self, candidates: &[char]) -> usize;
}

impl<F> HintPolicy for F
where
    F: FnMut(&[char]) -> usize + Send,
{
    fn choose(&mut self, candidates: &[char]) -> usize {
        self(candidates)
    }
}

/// Uniform random selection.
#[derive(Debug, Clone)]
pub struct RandomHints {
    rng: StdRng,
}

impl RandomHints {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic selection for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomHints {
    fn default() -> Self {
        Self::new()
    }
}

impl HintPolicy for RandomHints {
    fn choose(&mut self, candidates: &[char]) -> usize {
        self.rng.random_range(0..candidates.len())
    }
}

/// Pool of hintable letters and the count of hints spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintAdvisor {
    pool: BTreeSet<char>,
    hints_used: usize,
}

impl HintAdvisor {
    /// Starts with every distinct letter of the word.
    pub fn new(index: &CharacterIndex) -> Self {
        Self {
            pool: index.letters().collect(),
            hints_used: 0,
        }
    }

    /// Rejection a hint request would get right now, if any.
    pub fn refusal(&self) -> Option<HintOutcome> {
        if self.hints_used >= MAX_HINTS {
            Some(HintOutcome::Exhausted)
        } else if self.pool.len() <= 1 {
            Some(HintOutcome::LastLetterProtected)
        } else {
            None
        }
    }

    /// Picks a letter with `policy` and charges one hint.
    ///
    /// The caller reveals the letter, which also drops it from the pool.
    /// Returns `None` when [`HintAdvisor::refusal`] would refuse.
    pub(crate) fn draw(&mut self, policy: &mut dyn HintPolicy) -> Option<char> {
        if self.refusal().is_some() {
            return None;
        }
        let candidates: Vec<char> = self.pool.iter().copied().collect();
        let letter = candidates[policy.choose(&candidates) % candidates.len()];
        self.hints_used += 1;
        Some(letter)
    }

    /// Drops a revealed letter from the pool.
    pub(crate) fn remove(&mut self, letter: char) {
        self.pool.remove(&letter);
    }

    /// Empties the pool (the whole word was revealed).
    pub(crate) fn clear(&mut self) {
        self.pool.clear();
    }

    /// Letters still eligible as hints, sorted.
    pub fn pool(&self) -> &BTreeSet<char> {
        &self.pool
    }

    /// Hints spent so far.
    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Hints left to spend.
    pub fn hints_remaining(&self) -> usize {
        MAX_HINTS.saturating_sub(self.hints_used)
    }
}
