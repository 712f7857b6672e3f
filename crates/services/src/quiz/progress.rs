/// Aggregated view of quiz progress, useful for UI.
///
/// `all_answered` is the caller-level completion signal; the session itself
/// has no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub all_answered: bool,
}
