//! Bounded counter of incorrect attempts.

use serde::{Deserialize, Serialize};

use crate::action::SessionError;

/// Counts failures up to a fixed bound.
///
/// Invariant: `0 <= fail_count <= max_fails`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailBudget {
    fail_count: usize,
    max_fails: usize,
}

impl FailBudget {
    /// Creates a budget allowing `max_fails` failures.
    pub fn new(max_fails: usize) -> Result<Self, SessionError> {
        if max_fails == 0 {
            return Err(SessionError::ZeroMaxFails);
        }
        Ok(Self {
            fail_count: 0,
            max_fails,
        })
    }

    /// Records one failure. Saturates at the bound.
    pub(crate) fn record_failure(&mut self) {
        if self.fail_count < self.max_fails {
            self.fail_count += 1;
        }
    }

    /// Failures so far.
    pub fn fail_count(&self) -> usize {
        self.fail_count
    }

    /// The bound.
    pub fn max_fails(&self) -> usize {
        self.max_fails
    }

    /// Failures left before the bound is hit.
    pub fn remaining(&self) -> usize {
        self.max_fails - self.fail_count
    }

    /// Returns true once the bound is reached.
    pub fn is_exhausted(&self) -> bool {
        self.fail_count == self.max_fails
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bound_rejected() {
        assert_eq!(FailBudget::new(0), Err(SessionError::ZeroMaxFails));
    }

    #[test]
    fn test_saturates_at_bound() {
        let mut budget = FailBudget::new(2).unwrap();
        budget.record_failure();
        assert!(!budget.is_exhausted());
        assert_eq!(budget.remaining(), 1);
        budget.record_failure();
        budget.record_failure();
        assert!(budget.is_exhausted());
        assert_eq!(budget.fail_count(), 2);
    }
}
