use chrono::{DateTime, Utc};

use prep_core::Clock;
use prep_core::model::SeriesRecord;

use super::classifier::{CatalogBuckets, CatalogClassifier};
use crate::error::CatalogError;

/// Presentation-facing catalog facade that hides the time source from the UI.
///
/// The classifier itself is pure; this service owns the `Clock` so the host
/// page never reads wall-clock time directly and tests can pin `now`.
#[derive(Debug, Clone)]
pub struct CatalogService {
    clock: Clock,
}

impl CatalogService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Classify `series` against the service clock and the given search query.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Series` if any record ends before it starts.
    pub fn classify(
        &self,
        series: Vec<SeriesRecord>,
        query: &str,
    ) -> Result<CatalogBuckets, CatalogError> {
        CatalogClassifier::classify(series, self.clock.now(), query)
    }
}
