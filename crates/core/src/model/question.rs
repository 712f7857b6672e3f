use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must have at least one option")]
    NoOptions,
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One answer choice for a single-choice question.
///
/// At most one option per question carries `is_correct`; the feed guarantees
/// this and it is not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub text: String,
    pub image: Option<String>,
    pub is_correct: bool,
}

impl QuestionOption {
    #[must_use]
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            image: None,
            is_correct,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single-choice question with an optional post-answer explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    image: Option<String>,
    options: Vec<QuestionOption>,
    explanation: Option<String>,
}

impl Question {
    /// Creates a new question.
    ///
    /// The explanation is trimmed; a whitespace-only explanation collapses to
    /// `None`, so `explanation()` returning `Some` always means there is text
    /// to reveal.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank and
    /// `QuestionError::NoOptions` if the option list is empty.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        image: Option<String>,
        options: Vec<QuestionOption>,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let explanation = explanation
            .map(|e| e.trim().to_owned())
            .filter(|e| !e.is_empty());

        Ok(Self {
            id,
            prompt: prompt.trim().to_owned(),
            image: image.filter(|i| !i.trim().is_empty()),
            options,
            explanation,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&QuestionOption> {
        self.options.get(index)
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Index of the correct option, if the question marks one.
    #[must_use]
    pub fn correct_option(&self) -> Option<usize> {
        self.options.iter().position(|o| o.is_correct)
    }

    /// Whether the option at `index` is the correct one.
    ///
    /// Out-of-range indexes are simply not correct.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| o.is_correct)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<QuestionOption> {
        vec![
            QuestionOption::new("3.0 m/s", false),
            QuestionOption::new("9.8 m/s", true),
            QuestionOption::new("12.5 m/s", false),
        ]
    }

    #[test]
    fn new_rejects_blank_prompt() {
        let err = Question::new(QuestionId::new("q1"), "  ", None, options(), None).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn new_rejects_empty_options() {
        let err =
            Question::new(QuestionId::new("q1"), "Find v", None, Vec::new(), None).unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);
    }

    #[test]
    fn blank_explanation_collapses_to_none() {
        let question = Question::new(
            QuestionId::new("q1"),
            "Find v",
            None,
            options(),
            Some("   ".into()),
        )
        .unwrap();
        assert_eq!(question.explanation(), None);

        let question = Question::new(
            QuestionId::new("q2"),
            "Find v",
            None,
            options(),
            Some(" Use g = 9.8. ".into()),
        )
        .unwrap();
        assert_eq!(question.explanation(), Some("Use g = 9.8."));
    }

    #[test]
    fn correct_option_lookup() {
        let question =
            Question::new(QuestionId::new("q1"), "Find v", None, options(), None).unwrap();

        assert_eq!(question.correct_option(), Some(1));
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(99));
    }

    #[test]
    fn question_without_marked_answer_has_no_correct_option() {
        let question = Question::new(
            QuestionId::new("q1"),
            "Opinion poll",
            None,
            vec![
                QuestionOption::new("Yes", false),
                QuestionOption::new("No", false),
            ],
            None,
        )
        .unwrap();
        assert_eq!(question.correct_option(), None);
    }
}
