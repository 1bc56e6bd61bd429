//! slidefit: slide layout and content-fit engine.
//!
//! Computes non-overlapping vertical positions for a slide's title, subtitle
//! and content region on a fixed canvas, and reports whether the content
//! blocks fit. The geometry lives in `slidefit-layout`; this crate adds the
//! deck pipeline, configuration loading and the command-line tool.

pub mod deck;
pub mod error;
pub mod pipeline;

pub use deck::Deck;
pub use error::PipelineError;
pub use pipeline::{DeckReport, DeckSummary, LayoutPipeline, PipelineBuilder, SlideEntry};

pub use slidefit_executor::{DeckExecutor, Executor};
pub use slidefit_layout::{
    advise_split, BlockKind, BlockMetrics, Canvas, ContentBlock, EstimatorConfig,
    FitClassification, HeightEstimator, LayoutConfig, LayoutError, LayoutResult, OverflowReport,
    SlideContentModel, SlideLayout, SlideLayoutEngine, SplitAdvice, TextMeasurer, TextRole,
};
