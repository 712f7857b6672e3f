use super::session::{QuestionState, QuizSession};

/// Presentation-agnostic rendering of one answer choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub image: Option<String>,
    pub is_selected: bool,
}

/// Presentation-agnostic rendering of one question within a session.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// Option correctness never crosses this boundary, and `explanation` is
/// populated only once the session has revealed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    pub image: Option<String>,
    pub options: Vec<OptionView>,
    pub explanation: Option<String>,
    pub state: QuestionState,
}

impl QuestionView {
    /// Build the view for the question at `index`, if it exists.
    #[must_use]
    pub fn from_session(session: &QuizSession, index: usize) -> Option<Self> {
        let question = session.question(index)?;
        let selection = session.selection(index);

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| OptionView {
                index: i,
                text: option.text.clone(),
                image: option.image.clone(),
                is_selected: selection == Some(i),
            })
            .collect();

        let explanation = if session.is_revealed(index) {
            question.explanation().map(str::to_owned)
        } else {
            None
        };

        Some(Self {
            index,
            total: session.total_questions(),
            prompt: question.prompt().to_owned(),
            image: question.image().map(str::to_owned),
            options,
            explanation,
            state: session.state(index),
        })
    }

    /// Build the view for the session's current question.
    #[must_use]
    pub fn current(session: &QuizSession) -> Option<Self> {
        Self::from_session(session, session.current_index())
    }
}
