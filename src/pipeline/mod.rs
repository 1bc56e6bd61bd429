//! Deck layout pipeline.
//!
//! - [`PipelineBuilder`]: Fluent builder for constructing a layout pipeline
//! - [`LayoutPipeline`]: Lays out single slides or whole decks
//! - [`DeckReport`]: Per-slide results plus a [`DeckSummary`]
//!
//! # Example
//!
//! ```ignore
//! use slidefit::{Deck, PipelineBuilder};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_config_file("layout.json")?
//!     .with_worker_count(4)
//!     .with_cache(true)
//!     .build()?;
//!
//! let report = pipeline.layout_deck(&Deck::from_file("deck.json")?);
//! ```

mod builder;
mod orchestrator;
pub mod report;

pub use builder::PipelineBuilder;
pub use orchestrator::LayoutPipeline;
pub use report::{DeckReport, DeckSummary, SlideEntry};
