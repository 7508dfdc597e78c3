//! Attempt budget shared by every phase and frame of a session

/// Counter of accepted guesses against a fixed maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptBudget {
    max_attempts: usize,
    used: usize,
}

impl AttemptBudget {
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            used: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.used
    }

    /// Attempts left before a forced loss
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.max_attempts - self.used
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.used >= self.max_attempts
    }

    /// Record one accepted guess and return the new total
    ///
    /// The session never consumes past the maximum: it turns terminal on the
    /// guess that exhausts the budget.
    pub(crate) fn consume(&mut self) -> usize {
        debug_assert!(!self.is_exhausted(), "attempt budget already exhausted");
        self.used = (self.used + 1).min(self.max_attempts);
        self.used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_budget() {
        let budget = AttemptBudget::new(6);
        assert_eq!(budget.used(), 0);
        assert_eq!(budget.remaining(), 6);
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn consume_counts_up() {
        let mut budget = AttemptBudget::new(3);
        assert_eq!(budget.consume(), 1);
        assert_eq!(budget.consume(), 2);
        assert_eq!(budget.remaining(), 1);
        assert_eq!(budget.consume(), 3);
        assert!(budget.is_exhausted());
        assert_eq!(budget.remaining(), 0);
    }
}
