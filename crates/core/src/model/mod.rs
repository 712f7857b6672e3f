mod ids;
mod question;
mod score;
mod series;

pub use ids::{QuestionId, SeriesId, TestId, UserId};

pub use question::{Question, QuestionError, QuestionOption};
pub use score::Score;
pub use series::{CreatorRef, SeriesCategory, SeriesError, SeriesRecord, TestRef, TimeLeft};
