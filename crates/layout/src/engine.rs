use crate::cascade::{self, LayoutResult};
use crate::config::LayoutConfig;
use crate::estimate::{CharCountMeasurer, HeightEstimator};
use crate::overflow::{self, OverflowReport};
use crate::split::{self, SplitAdvice};
use crate::LayoutError;
use serde::Serialize;
use slidefit_traits::TextMeasurer;
use slidefit_types::{ContentBlock, SlideContentModel};

/// Everything computed for one slide: positions plus the fit report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideLayout {
    pub layout: LayoutResult,
    pub report: OverflowReport,
}

impl SlideLayout {
    pub fn split_advice<'a>(&self, blocks: &'a [ContentBlock]) -> Option<SplitAdvice<'a>> {
        split::advise_split(&self.report, blocks)
    }
}

/// Lays out slides against a fixed configuration.
///
/// The engine holds no mutable state; one instance can be shared across
/// threads and `layout` is deterministic.
#[derive(Debug, Clone)]
pub struct SlideLayoutEngine<M: TextMeasurer = CharCountMeasurer> {
    config: LayoutConfig,
    estimator: HeightEstimator<M>,
}

impl SlideLayoutEngine<CharCountMeasurer> {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        let measurer = CharCountMeasurer::new(&config.estimator);
        Self::with_measurer(config, measurer)
    }
}

impl Default for SlideLayoutEngine<CharCountMeasurer> {
    fn default() -> Self {
        let config = LayoutConfig::default();
        Self {
            config,
            estimator: HeightEstimator::new(config.estimator),
        }
    }
}

impl<M: TextMeasurer> SlideLayoutEngine<M> {
    pub fn with_measurer(config: LayoutConfig, measurer: M) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            estimator: HeightEstimator::with_measurer(config.estimator, measurer),
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn estimator(&self) -> &HeightEstimator<M> {
        &self.estimator
    }

    /// Positions the header and classifies content fit.
    ///
    /// Fails only on invalid input. Overflow is reported, never raised.
    pub fn layout(&self, model: &SlideContentModel) -> Result<SlideLayout, LayoutError> {
        validate_model(model)?;

        let layout = cascade::compute_layout(&self.config, &self.estimator, model);
        let report = overflow::analyze(
            &self.config,
            &self.estimator,
            layout.content_top,
            &model.blocks,
        );

        debug_assert!(layout.title_dominant_layout || layout.is_overlap_free(self.config.gap));

        log::debug!(
            "Laid out '{}': content_top={:.2}in required={:.2}in -> {} (overflow {:.2}in)",
            model.title,
            layout.content_top,
            report.total_required_height,
            report.classification,
            report.overflow_amount_inches
        );

        Ok(SlideLayout { layout, report })
    }
}

/// Rejects structurally malformed slides.
///
/// Text content is never rejected for its length or emptiness; only shapes
/// the renderer cannot draw are.
pub fn validate_model(model: &SlideContentModel) -> Result<(), LayoutError> {
    for (index, block) in model.blocks.iter().enumerate() {
        if matches!(block, ContentBlock::BulletGroup { items } if items.is_empty()) {
            return Err(LayoutError::InvalidInput(format!(
                "block {} is a bullet group with no items",
                index
            )));
        }
    }
    Ok(())
}
