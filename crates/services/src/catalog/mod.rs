mod classifier;
mod service;

// Public API of the catalog subsystem.
pub use crate::error::CatalogError;
pub use classifier::{CatalogBuckets, CatalogClassifier, ClassifiedSeries, TabCounts};
pub use service::CatalogService;
