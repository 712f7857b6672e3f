use chrono::{DateTime, Utc};
use std::fmt;

use prep_core::model::{Question, Score};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── QUESTION STATE ────────────────────────────────────────────────────────────
//

/// Per-question answer state.
///
/// Transitions `Unanswered → Answered` only, via `select_option`; a question
/// never becomes unanswered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Answered,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One learner's pass through a fixed, ordered set of questions.
///
/// Owned exclusively by a single browsing context; every operation is a
/// discrete, serialized user action. State is mutated in place behind the
/// same before/after contract an immutable-update style would give callers.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selections: Vec<Option<usize>>,
    revealed: Vec<bool>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a session over `questions`.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestionSet` if `questions` is empty.
    pub fn start(
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }

        let count = questions.len();
        Ok(Self {
            questions,
            current: 0,
            selections: vec![None; count],
            revealed: vec![false; count],
            started_at,
        })
    }

    // Accessors
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Current question pointer, always within `[0, total_questions)`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The selected option for a question, if one has been recorded.
    #[must_use]
    pub fn selection(&self, index: usize) -> Option<usize> {
        self.selections.get(index).copied().flatten()
    }

    /// Whether a question's explanation has been revealed.
    ///
    /// Out-of-range indexes are simply not revealed.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn state(&self, index: usize) -> QuestionState {
        if self.selection(index).is_some() {
            QuestionState::Answered
        } else {
            QuestionState::Unanswered
        }
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.selections.iter().all(Option::is_some)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.total_questions();
        let answered = self.answered_count();
        QuizProgress {
            total,
            answered,
            remaining: total - answered,
            all_answered: answered == total,
        }
    }

    /// Record (or change) the selected option for a question.
    ///
    /// Re-selection overwrites the prior choice and never double-counts in
    /// scoring. The first selection on a question with a non-empty explanation
    /// reveals it; revealing is monotonic and survives later re-selection.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::QuestionOutOfRange` or `QuizError::OptionOutOfRange`
    /// when an index is outside its valid bound, leaving the session unchanged.
    pub fn select_option(&mut self, question: usize, option: usize) -> Result<(), QuizError> {
        let total = self.questions.len();
        let Some(target) = self.questions.get(question) else {
            return Err(QuizError::QuestionOutOfRange {
                index: question,
                total,
            });
        };
        if option >= target.option_count() {
            return Err(QuizError::OptionOutOfRange {
                index: option,
                total: target.option_count(),
            });
        }

        let first_selection = self.selections[question].is_none();
        self.selections[question] = Some(option);
        if first_selection && target.explanation().is_some() {
            self.revealed[question] = true;
        }
        Ok(())
    }

    /// Move to the next question; a no-op at the last question.
    pub fn advance(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Move to the previous question; a no-op at the first question.
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Recompute the score from the full selection mapping.
    ///
    /// An unanswered question counts as incorrect; the total always equals
    /// the question count.
    #[must_use]
    pub fn score(&self) -> Score {
        let correct = self
            .questions
            .iter()
            .zip(&self.selections)
            .filter(|(question, selection)| {
                selection.is_some_and(|index| question.is_correct(index))
            })
            .count();
        Score::new(correct, self.questions.len())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answered", &self.answered_count())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{QuestionId, QuestionOption};
    use prep_core::time::fixed_now;

    fn build_question(id: u64, correct: usize, explanation: Option<&str>) -> Question {
        let options = (0..4)
            .map(|i| QuestionOption::new(format!("option {i}"), i == correct))
            .collect();
        Question::new(
            QuestionId::new(format!("q{id}")),
            format!("Question {id}"),
            None,
            options,
            explanation.map(str::to_owned),
        )
        .unwrap()
    }

    fn three_question_session() -> QuizSession {
        let questions = vec![
            build_question(0, 2, None),
            build_question(1, 1, Some("Because option 1.")),
            build_question(2, 0, Some("See chapter 4.")),
        ];
        QuizSession::start(questions, fixed_now()).unwrap()
    }

    #[test]
    fn start_rejects_empty_question_set() {
        let err = QuizSession::start(Vec::new(), fixed_now()).unwrap_err();
        assert_eq!(err, QuizError::EmptyQuestionSet);
    }

    #[test]
    fn start_initializes_clean_state() {
        let session = three_question_session();

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
        for i in 0..3 {
            assert_eq!(session.state(i), QuestionState::Unanswered);
            assert!(!session.is_revealed(i));
        }
    }

    #[test]
    fn single_correct_answer_scores_one_of_three() {
        let mut session = three_question_session();

        session.select_option(1, 1).unwrap();

        let score = session.score();
        assert_eq!(score.correct(), 1);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn score_counts_unanswered_as_incorrect() {
        let session = three_question_session();
        let score = session.score();
        assert_eq!(score.correct(), 0);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn perfect_run_scores_full_marks() {
        let mut session = three_question_session();
        session.select_option(0, 2).unwrap();
        session.select_option(1, 1).unwrap();
        session.select_option(2, 0).unwrap();

        assert!(session.score().is_perfect());
        assert!(session.all_answered());
    }

    #[test]
    fn reselection_overwrites_and_adjusts_score_by_one() {
        let mut session = three_question_session();
        session.select_option(1, 1).unwrap();
        assert_eq!(session.score().correct(), 1);

        // Changing to a wrong option drops the score by exactly one.
        session.select_option(1, 3).unwrap();
        assert_eq!(session.score().correct(), 0);
        assert_eq!(session.selection(1), Some(3));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn out_of_range_indexes_leave_state_unchanged() {
        let mut session = three_question_session();
        session.select_option(1, 1).unwrap();

        let err = session.select_option(7, 0).unwrap_err();
        assert_eq!(err, QuizError::QuestionOutOfRange { index: 7, total: 3 });

        let err = session.select_option(0, 9).unwrap_err();
        assert_eq!(err, QuizError::OptionOutOfRange { index: 9, total: 4 });

        assert_eq!(session.selection(0), None);
        assert_eq!(session.selection(1), Some(1));
        assert_eq!(session.score().correct(), 1);
    }

    #[test]
    fn explanation_reveals_on_first_selection_only_when_present() {
        let mut session = three_question_session();

        // Question 0 has no explanation; selecting never reveals.
        session.select_option(0, 1).unwrap();
        assert!(!session.is_revealed(0));

        // Question 1 reveals on first selection.
        assert!(!session.is_revealed(1));
        session.select_option(1, 0).unwrap();
        assert!(session.is_revealed(1));
    }

    #[test]
    fn reveal_is_monotonic_across_reselection() {
        let mut session = three_question_session();
        session.select_option(2, 3).unwrap();
        assert!(session.is_revealed(2));

        session.select_option(2, 0).unwrap();
        session.select_option(2, 1).unwrap();
        assert!(session.is_revealed(2));
    }

    #[test]
    fn answered_never_transitions_back() {
        let mut session = three_question_session();
        session.select_option(0, 0).unwrap();
        assert_eq!(session.state(0), QuestionState::Answered);

        session.select_option(0, 3).unwrap();
        assert_eq!(session.state(0), QuestionState::Answered);
    }

    #[test]
    fn navigation_clamps_to_bounds() {
        let mut session = three_question_session();

        session.retreat();
        assert_eq!(session.current_index(), 0);

        session.advance();
        session.advance();
        assert_eq!(session.current_index(), 2);

        session.advance();
        session.advance();
        assert_eq!(session.current_index(), 2);

        session.retreat();
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn progress_tracks_answers_not_position() {
        let mut session = three_question_session();
        session.select_option(2, 0).unwrap();

        let progress = session.progress();
        assert_eq!(progress.total, 3);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.remaining, 2);
        assert!(!progress.all_answered);
    }
}
