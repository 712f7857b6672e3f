use std::fmt;

/// Derived score for a quiz session: answered-correct count over total.
///
/// Never stored independently; always recomputed from the selection mapping,
/// so a question with no recorded selection counts as incorrect rather than
/// landing in a separate "skipped" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Percentage of correct answers; zero for an empty total.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}
