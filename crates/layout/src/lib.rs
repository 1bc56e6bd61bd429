use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid slide content: {0}")]
    InvalidInput(String),
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to parse layout configuration: {0}")]
    ConfigParse(String),
}

pub mod cache;
pub mod cascade;
pub mod config;
pub mod engine;
pub mod estimate;
pub mod overflow;
pub mod split;
pub mod util;

pub use self::cache::{CacheStats, ContentHash, DEFAULT_CACHE_CAPACITY, LayoutCache};
pub use self::cascade::{compute_layout, ContentStart, LayoutResult};
pub use self::config::{EstimatorConfig, LayoutConfig};
pub use self::engine::{validate_model, SlideLayout, SlideLayoutEngine};
pub use self::estimate::{CharCountMeasurer, HeightEstimator};
pub use self::overflow::{BlockMetrics, FitClassification, OverflowReport};
pub use self::split::{advise_split, suggested_split_index, SplitAdvice};

// Re-export the shared model so callers need only this crate
pub use slidefit_traits::{TextMeasurer, TextRole};
pub use slidefit_types::{BlockKind, Canvas, ContentBlock, SlideContentModel, VerticalSpan};

#[cfg(test)]
mod property_test;
#[cfg(test)]
mod test_utils;
