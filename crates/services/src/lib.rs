#![forbid(unsafe_code)]

pub mod api;
pub mod catalog;
pub mod error;
pub mod feed;
pub mod profile;
pub mod quiz;

pub use prep_core::Clock;

pub use error::{ApiError, CatalogError, FeedError, QuizError};

pub use api::{ApiConfig, CatalogApi};
pub use catalog::{CatalogBuckets, CatalogClassifier, CatalogService, ClassifiedSeries, TabCounts};
pub use profile::{ProfileOverview, SeriesJoinedItem, TestResultItem};
pub use quiz::{
    OptionView, QuestionState, QuestionView, QuizLoopService, QuizProgress, QuizSession,
    TestAttempt, TestRecord,
};
