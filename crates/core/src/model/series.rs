use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::ids::{SeriesId, TestId, UserId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeriesError {
    #[error("series title cannot be empty")]
    EmptyTitle,

    #[error("series {id} ends before it starts")]
    EndBeforeStart { id: SeriesId },
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Lifecycle state of a series relative to a reference instant.
///
/// Always computed, never stored: the same record moves through the three
/// states as time passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesCategory {
    Ongoing,
    Upcoming,
    Completed,
}

impl SeriesCategory {
    /// All categories in tab order.
    pub const ALL: [SeriesCategory; 3] = [
        SeriesCategory::Ongoing,
        SeriesCategory::Upcoming,
        SeriesCategory::Completed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesCategory::Ongoing => "ongoing",
            SeriesCategory::Upcoming => "upcoming",
            SeriesCategory::Completed => "completed",
        }
    }
}

impl fmt::Display for SeriesCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── TIME LEFT ─────────────────────────────────────────────────────────────────
//

/// Remaining time badge for an ongoing series.
///
/// A series whose remaining time rounds down to zero whole days is labelled
/// "Ending today" rather than "0 days left".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLeft {
    Days(u32),
    EndingToday,
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLeft::Days(1) => write!(f, "1 day left"),
            TimeLeft::Days(n) => write!(f, "{n} days left"),
            TimeLeft::EndingToday => write!(f, "Ending today"),
        }
    }
}

//
// ─── REFS ──────────────────────────────────────────────────────────────────────
//

/// A test bundled inside a series, as referenced by the catalog feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRef {
    pub id: TestId,
    pub title: String,
}

impl TestRef {
    #[must_use]
    pub fn new(id: TestId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// The user who published a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorRef {
    pub id: UserId,
    pub name: String,
}

impl CreatorRef {
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

//
// ─── SERIES RECORD ─────────────────────────────────────────────────────────────
//

/// A time-windowed bundle of tests a learner can enroll in.
///
/// Immutable once fetched; owned by the page that requested it for the
/// duration of one render cycle. Date ordering is deliberately not checked
/// here: records arrive from a remote feed and the classifier is the
/// fail-fast validation point, so a malformed record can be reported with
/// its id instead of being silently miscategorized.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRecord {
    id: SeriesId,
    title: String,
    description: String,
    image: Option<String>,
    price: u32,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    tests: Vec<TestRef>,
    created_by: CreatorRef,
}

impl SeriesRecord {
    /// Creates a new series record.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::EmptyTitle` if the title is empty or
    /// whitespace-only.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: SeriesId,
        title: impl Into<String>,
        description: impl Into<String>,
        image: Option<String>,
        price: u32,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        tests: Vec<TestRef>,
        created_by: CreatorRef,
    ) -> Result<Self, SeriesError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SeriesError::EmptyTitle);
        }

        let image = image.filter(|i| !i.trim().is_empty());

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description: description.into().trim().to_owned(),
            image,
            price,
            starts_at,
            ends_at,
            tests,
            created_by,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &SeriesId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Price in the platform currency's smallest listed unit.
    #[must_use]
    pub fn price(&self) -> u32 {
        self.price
    }

    #[must_use]
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    #[must_use]
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    #[must_use]
    pub fn tests(&self) -> &[TestRef] {
        &self.tests
    }

    #[must_use]
    pub fn test_count(&self) -> usize {
        self.tests.len()
    }

    #[must_use]
    pub fn created_by(&self) -> &CreatorRef {
        &self.created_by
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    /// Case-insensitive search over title, description, and creator name.
    ///
    /// An empty query matches every record.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.created_by.name.to_lowercase().contains(&query)
    }

    /// Computes the lifecycle category relative to `now`.
    ///
    /// Boundary policy: a series starting exactly at `now` is ongoing, not
    /// upcoming; one ending exactly at `now` is ongoing, not completed.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::EndBeforeStart` if the record's end precedes its
    /// start, identifying the offending id.
    pub fn category_at(&self, now: DateTime<Utc>) -> Result<SeriesCategory, SeriesError> {
        if self.ends_at < self.starts_at {
            return Err(SeriesError::EndBeforeStart {
                id: self.id.clone(),
            });
        }

        if self.starts_at > now {
            Ok(SeriesCategory::Upcoming)
        } else if self.ends_at < now {
            Ok(SeriesCategory::Completed)
        } else {
            Ok(SeriesCategory::Ongoing)
        }
    }

    /// Whole days between `now` and the series end, never negative.
    #[must_use]
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.ends_at - now).num_days().max(0)
    }

    /// Remaining-time badge for an ongoing series.
    #[must_use]
    pub fn time_left(&self, now: DateTime<Utc>) -> TimeLeft {
        match self.days_remaining(now) {
            0 => TimeLeft::EndingToday,
            days => TimeLeft::Days(u32::try_from(days).unwrap_or(u32::MAX)),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
