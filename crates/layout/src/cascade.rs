//! Top-down placement of title, subtitle and the content region.
//!
//! Each stage is a pure function from the previous stage's span to the next
//! one. There is no shared cursor and no backtracking.

use crate::config::LayoutConfig;
use crate::estimate::HeightEstimator;
use crate::util::approx_ge;
use serde::Serialize;
use slidefit_traits::TextMeasurer;
use slidefit_types::{SlideContentModel, VerticalSpan};

/// The positional contract handed to the renderer.
///
/// Values are used verbatim downstream, never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutResult {
    pub title_top: f32,
    pub title_height: f32,
    pub subtitle_top: Option<f32>,
    pub subtitle_height: Option<f32>,
    pub content_top: f32,
    /// Set when the title (and subtitle) would push content below
    /// `content_top_max` and `content_top` was clamped. Content may then
    /// overlap the bottom of the header.
    pub title_dominant_layout: bool,
}

impl LayoutResult {
    pub fn title_span(&self) -> VerticalSpan {
        VerticalSpan::new(self.title_top, self.title_height)
    }

    pub fn subtitle_span(&self) -> Option<VerticalSpan> {
        match (self.subtitle_top, self.subtitle_height) {
            (Some(top), Some(height)) => Some(VerticalSpan::new(top, height)),
            _ => None,
        }
    }

    pub fn title_bottom(&self) -> f32 {
        self.title_span().bottom()
    }

    /// Bottom of the lowest header element.
    pub fn header_bottom(&self) -> f32 {
        self.subtitle_span()
            .map_or_else(|| self.title_bottom(), |s| s.bottom())
    }

    /// Whether title, subtitle and content are separated by at least `gap`.
    ///
    /// Always false for a title-dominant layout whose clamp pulled content
    /// into the header.
    pub fn is_overlap_free(&self, gap: f32) -> bool {
        let title_clear = self
            .subtitle_span()
            .is_none_or(|s| approx_ge(s.top, self.title_bottom() + gap));
        title_clear && approx_ge(self.content_top, self.header_bottom() + gap)
    }
}

/// Where the content region starts and whether the clamp fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentStart {
    pub top: f32,
    /// The unclamped value, `header_bottom + gap`.
    pub natural_top: f32,
    pub clamped: bool,
}

pub fn place_title<M: TextMeasurer>(
    config: &LayoutConfig,
    estimator: &HeightEstimator<M>,
    title: &str,
) -> VerticalSpan {
    VerticalSpan::new(config.top_margin, estimator.estimate_title_height(title))
}

pub fn place_subtitle<M: TextMeasurer>(
    config: &LayoutConfig,
    estimator: &HeightEstimator<M>,
    title: &VerticalSpan,
    subtitle: &str,
) -> VerticalSpan {
    title.stack_below(config.gap, estimator.estimate_subtitle_height(subtitle))
}

pub fn place_content(config: &LayoutConfig, header_bottom: f32) -> ContentStart {
    let natural_top = header_bottom + config.gap;
    if natural_top > config.content_top_max {
        ContentStart {
            top: config.content_top_max,
            natural_top,
            clamped: true,
        }
    } else {
        ContentStart {
            top: natural_top,
            natural_top,
            clamped: false,
        }
    }
}

/// Runs the cascade title -> subtitle -> content. Total: never fails.
pub fn compute_layout<M: TextMeasurer>(
    config: &LayoutConfig,
    estimator: &HeightEstimator<M>,
    model: &SlideContentModel,
) -> LayoutResult {
    let title = place_title(config, estimator, &model.title);
    let subtitle = model
        .subtitle
        .as_deref()
        .map(|text| place_subtitle(config, estimator, &title, text));

    let header_bottom = subtitle.as_ref().unwrap_or(&title).bottom();
    let content = place_content(config, header_bottom);

    if content.clamped {
        log::warn!(
            "Title-dominant layout: content would start at {:.2}in, \
             clamped to {:.2}in (title '{}')",
            content.natural_top,
            content.top,
            model.title
        );
    }

    LayoutResult {
        title_top: title.top,
        title_height: title.height,
        subtitle_top: subtitle.map(|s| s.top),
        subtitle_height: subtitle.map(|s| s.height),
        content_top: content.top,
        title_dominant_layout: content.clamped,
    }
}
