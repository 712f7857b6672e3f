use chrono::Duration;

use prep_core::Clock;
use prep_core::model::{Question, Score, TestId};

use super::session::QuizSession;
use crate::error::QuizError;

//
// ─── TEST RECORD ───────────────────────────────────────────────────────────────
//

/// A playable test as delivered by the test-detail feed, with its questions
/// already embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord {
    pub id: TestId,
    pub title: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub questions: Vec<Question>,
    pub is_example: bool,
    pub price: u32,
    pub duration_minutes: Option<u32>,
    pub passing_score: Option<usize>,
}

impl TestRecord {
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

/// Outcome row for a finished attempt, shaped like the profile page's
/// "Tests Given" entries.
#[derive(Debug, Clone, PartialEq)]
pub struct TestAttempt {
    pub test_id: TestId,
    pub title: String,
    pub score: Score,
    pub time_taken: Duration,
    /// Pass/fail against the test's passing score, when it defines one.
    pub passed: Option<bool>,
}

//
// ─── WORKFLOW ──────────────────────────────────────────────────────────────────
//

/// Orchestrates session start and attempt summaries around a clock.
#[derive(Debug, Clone)]
pub struct QuizLoopService {
    clock: Clock,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Start a session over a bare question list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestionSet` if `questions` is empty.
    pub fn start(&self, questions: Vec<Question>) -> Result<QuizSession, QuizError> {
        QuizSession::start(questions, self.clock.now())
    }

    /// Start a session for a demo test.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestionSet` if the test has no questions.
    pub fn start_test(&self, test: &TestRecord) -> Result<QuizSession, QuizError> {
        self.start(test.questions.clone())
    }

    /// Summarize a session as an attempt row.
    ///
    /// The session itself has no terminal state; calling this is the host
    /// page's judgment that the learner is done.
    #[must_use]
    pub fn finish(&self, session: &QuizSession, test: &TestRecord) -> TestAttempt {
        let score = session.score();
        TestAttempt {
            test_id: test.id.clone(),
            title: test.title.clone(),
            score,
            time_taken: self.clock.now() - session.started_at(),
            passed: test
                .passing_score
                .map(|required| score.correct() >= required),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
