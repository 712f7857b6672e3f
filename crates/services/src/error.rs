//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::model::{QuestionError, SeriesError};

/// Errors emitted by the catalog classifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// Errors emitted by quiz sessions.
///
/// A rejected operation leaves the session unchanged; there is no partial
/// failure state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot start a session with no questions")]
    EmptyQuestionSet,
    #[error("question index {index} out of range for {total} questions")]
    QuestionOutOfRange { index: usize, total: usize },
    #[error("option index {index} out of range for {total} options")]
    OptionOutOfRange { index: usize, total: usize },
}

/// Errors emitted while decoding upstream feed payloads.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted by the catalog API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("catalog API request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Feed(#[from] FeedError),
}
