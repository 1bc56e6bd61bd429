use super::report::DeckReport;
use crate::deck::Deck;
use log::{debug, info};
use slidefit_executor::{DeckExecutor, Executor};
use slidefit_layout::{
    CacheStats, LayoutCache, LayoutConfig, LayoutError, SlideContentModel, SlideLayout,
    SlideLayoutEngine,
};
use std::sync::Arc;
use std::time::Instant;

/// Lays out slides with a shared engine, fanning decks out over an executor.
///
/// Slides are independent, so no coordination happens between workers
/// beyond the optional content-hash cache.
pub struct LayoutPipeline {
    engine: Arc<SlideLayoutEngine>,
    executor: DeckExecutor,
    cache: Option<Arc<LayoutCache>>,
}

impl LayoutPipeline {
    pub fn new(
        engine: Arc<SlideLayoutEngine>,
        executor: DeckExecutor,
        cache: Option<Arc<LayoutCache>>,
    ) -> Self {
        Self {
            engine,
            executor,
            cache,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    pub fn executor(&self) -> &DeckExecutor {
        &self.executor
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|c| c.stats())
    }

    /// Lays out a single slide on the calling thread.
    pub fn layout_slide(
        &self,
        model: &SlideContentModel,
    ) -> Result<Arc<SlideLayout>, LayoutError> {
        layout_one(&self.engine, self.cache.as_deref(), model)
    }

    /// Lays out every slide of `deck`. Results keep the deck's slide order;
    /// an invalid slide does not affect the others.
    pub fn layout_deck(&self, deck: &Deck) -> DeckReport {
        let start = Instant::now();
        info!(
            "Laying out {} slides with the {} executor ({} workers).",
            deck.len(),
            self.executor.name(),
            self.executor.parallelism()
        );

        let engine = Arc::clone(&self.engine);
        let cache = self.cache.clone();
        let results = self
            .executor
            .execute_all_fallible(deck.slides.clone(), move |model| {
                layout_one(&engine, cache.as_deref(), &model)
            });

        let report = DeckReport::from_results(deck, results);
        info!(
            "Deck laid out in {:?}: {} fit, {} tight, {} overflow, {} invalid.",
            start.elapsed(),
            report.summary.fits,
            report.summary.tight,
            report.summary.overflow,
            report.summary.invalid
        );
        if let Some(stats) = self.cache_stats() {
            debug!(
                "Layout cache: {} hits, {} misses, {} entries.",
                stats.hits, stats.misses, stats.entries
            );
        }
        report
    }
}

fn layout_one(
    engine: &SlideLayoutEngine,
    cache: Option<&LayoutCache>,
    model: &SlideContentModel,
) -> Result<Arc<SlideLayout>, LayoutError> {
    match cache {
        Some(cache) => cache.get_or_compute(model, || engine.layout(model)),
        None => engine.layout(model).map(Arc::new),
    }
}
