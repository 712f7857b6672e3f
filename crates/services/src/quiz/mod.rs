mod progress;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use session::{QuestionState, QuizSession};
pub use view::{OptionView, QuestionView};
pub use workflow::{QuizLoopService, TestAttempt, TestRecord};
