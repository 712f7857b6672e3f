use thiserror::Error;

use crate::model::QuestionError;
use crate::model::SeriesError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}
