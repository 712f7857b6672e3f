use chrono::{DateTime, Utc};

use prep_core::model::{SeriesCategory, SeriesRecord, TimeLeft};

use crate::error::CatalogError;

//
// ─── CLASSIFIED SERIES ─────────────────────────────────────────────────────────
//

/// A series that passed the search filter, tagged with its computed facts.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedSeries {
    record: SeriesRecord,
    category: SeriesCategory,
    time_left: Option<TimeLeft>,
}

impl ClassifiedSeries {
    #[must_use]
    pub fn record(&self) -> &SeriesRecord {
        &self.record
    }

    #[must_use]
    pub fn category(&self) -> SeriesCategory {
        self.category
    }

    /// Remaining-time badge; populated for ongoing series only.
    #[must_use]
    pub fn time_left(&self) -> Option<TimeLeft> {
        self.time_left
    }

    #[must_use]
    pub fn into_record(self) -> SeriesRecord {
        self.record
    }
}

//
// ─── BUCKETS ───────────────────────────────────────────────────────────────────
//

/// Per-tab item counts for the catalog page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabCounts {
    pub ongoing: usize,
    pub upcoming: usize,
    pub completed: usize,
}

/// The three mutually exclusive catalog tabs.
///
/// For a fixed reference instant the buckets partition the filtered input
/// exactly: every filtered series appears in exactly one bucket, in input
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogBuckets {
    ongoing: Vec<ClassifiedSeries>,
    upcoming: Vec<ClassifiedSeries>,
    completed: Vec<ClassifiedSeries>,
}

impl CatalogBuckets {
    #[must_use]
    pub fn ongoing(&self) -> &[ClassifiedSeries] {
        &self.ongoing
    }

    #[must_use]
    pub fn upcoming(&self) -> &[ClassifiedSeries] {
        &self.upcoming
    }

    #[must_use]
    pub fn completed(&self) -> &[ClassifiedSeries] {
        &self.completed
    }

    #[must_use]
    pub fn bucket(&self, category: SeriesCategory) -> &[ClassifiedSeries] {
        match category {
            SeriesCategory::Ongoing => &self.ongoing,
            SeriesCategory::Upcoming => &self.upcoming,
            SeriesCategory::Completed => &self.completed,
        }
    }

    #[must_use]
    pub fn counts(&self) -> TabCounts {
        TabCounts {
            ongoing: self.ongoing.len(),
            upcoming: self.upcoming.len(),
            completed: self.completed.len(),
        }
    }

    /// Total number of classified items across all three tabs.
    #[must_use]
    pub fn total(&self) -> usize {
        self.ongoing.len() + self.upcoming.len() + self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn push(&mut self, item: ClassifiedSeries) {
        match item.category {
            SeriesCategory::Ongoing => self.ongoing.push(item),
            SeriesCategory::Upcoming => self.upcoming.push(item),
            SeriesCategory::Completed => self.completed.push(item),
        }
    }
}

//
// ─── CLASSIFIER ────────────────────────────────────────────────────────────────
//

/// Partitions a series list into ongoing/upcoming/completed tabs.
///
/// Pure and referentially transparent: identical `(series, now, query)`
/// inputs always yield identical buckets and ordering.
pub struct CatalogClassifier;

impl CatalogClassifier {
    /// Filter by `query`, then categorize the survivors relative to `now`.
    ///
    /// Filtering precedes categorization, and input order is preserved inside
    /// each bucket. Empty input yields three empty buckets.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Series` if any record ends before it starts.
    /// The whole call fails before any bucketing, whether or not the
    /// malformed record would have passed the filter.
    pub fn classify(
        series: Vec<SeriesRecord>,
        now: DateTime<Utc>,
        query: &str,
    ) -> Result<CatalogBuckets, CatalogError> {
        for record in &series {
            record.category_at(now)?;
        }

        let mut buckets = CatalogBuckets::default();
        for record in series {
            if !record.matches_query(query) {
                continue;
            }
            let category = record.category_at(now)?;
            let time_left = (category == SeriesCategory::Ongoing)
                .then(|| record.time_left(now));
            buckets.push(ClassifiedSeries {
                record,
                category,
                time_left,
            });
        }

        Ok(buckets)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
