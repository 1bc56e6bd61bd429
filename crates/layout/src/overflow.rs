//! Content-fit analysis against the safe area of the canvas.
//!
//! The analysis is advisory: an `OVERFLOW` classification never stops the
//! slide from being rendered with the computed geometry.

use crate::config::LayoutConfig;
use crate::estimate::HeightEstimator;
use crate::util::{EPSILON, snap_to_zero};
use itertools::Itertools;
use serde::Serialize;
use slidefit_traits::TextMeasurer;
use slidefit_types::{BlockKind, ContentBlock};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FitClassification {
    /// Content ends at or above the safe bottom.
    Fits,
    /// Content spills past the safe bottom by no more than the tolerance.
    Tight,
    Overflow,
}

impl FitClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitClassification::Fits => "FITS",
            FitClassification::Tight => "TIGHT",
            FitClassification::Overflow => "OVERFLOW",
        }
    }

    /// `FITS` and `TIGHT` are both rendered as-is without advice to split.
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, FitClassification::Overflow)
    }
}

impl fmt::Display for FitClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of one content block inside the content region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockMetrics {
    pub index: usize,
    pub kind: BlockKind,
    pub height: f32,
    pub top: f32,
    pub bottom: f32,
    /// The block's cumulative height from the content start exceeds the
    /// available height by more than `EPSILON`, i.e. it ends below
    /// `max_content_bottom`.
    pub exceeds_safe_area: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverflowReport {
    pub classification: FitClassification,
    /// `actual_bottom - max_content_bottom`, snapped to zero within
    /// `EPSILON`. Negative when there is room left.
    pub overflow_amount_inches: f32,
    /// Room left below the content, zero unless the slide fits.
    pub margin_inches: f32,
    pub recommendation: Option<String>,
    pub per_block_breakdown: Vec<BlockMetrics>,
    pub content_top: f32,
    pub available_height: f32,
    pub total_required_height: f32,
    pub actual_bottom: f32,
    pub max_content_bottom: f32,
}

impl OverflowReport {
    pub fn fits(&self) -> bool {
        self.classification == FitClassification::Fits
    }

    pub fn is_overflow(&self) -> bool {
        self.classification == FitClassification::Overflow
    }
}

/// Estimates every block and classifies the result.
pub fn analyze<M: TextMeasurer>(
    config: &LayoutConfig,
    estimator: &HeightEstimator<M>,
    content_top: f32,
    blocks: &[ContentBlock],
) -> OverflowReport {
    let heights: Vec<(BlockKind, f32)> = blocks
        .iter()
        .map(|b| (b.kind(), estimator.estimate_block_height(b)))
        .collect();
    analyze_heights(config, content_top, &heights)
}

/// Sum of block heights plus one gap between each pair of neighbours.
pub fn total_required_height(heights: &[f32], gap: f32) -> f32 {
    let sum: f32 = heights.iter().sum();
    sum + heights.len().saturating_sub(1) as f32 * gap
}

/// Classifies pre-computed block heights stacked from `content_top`.
pub fn analyze_heights(
    config: &LayoutConfig,
    content_top: f32,
    heights: &[(BlockKind, f32)],
) -> OverflowReport {
    let max_content_bottom = config.max_content_bottom();
    let available_height = max_content_bottom - content_top;

    let breakdown = stack_blocks(config.gap, content_top, available_height, heights);
    let raw: Vec<f32> = heights.iter().map(|&(_, h)| h).collect();
    let total = total_required_height(&raw, config.gap);

    let actual_bottom = content_top + total;
    let overflow_amount = snap_to_zero(actual_bottom - max_content_bottom);

    // A header that reaches the safe bottom is an overflow even for an
    // empty slide, so `overflow_amount <= 0` alone does not imply FITS.
    let classification = if available_height <= 0.0 {
        FitClassification::Overflow
    } else if overflow_amount <= 0.0 {
        FitClassification::Fits
    } else if overflow_amount <= config.overflow_tolerance + EPSILON {
        FitClassification::Tight
    } else {
        FitClassification::Overflow
    };

    let margin = if overflow_amount < 0.0 { -overflow_amount } else { 0.0 };

    let recommendation = match classification {
        FitClassification::Fits => None,
        FitClassification::Tight => Some(format!(
            "Content extends {:.2}in past the safe area, within the {:.2}in tolerance. \
             Consider trimming text if footer elements are crowded.",
            overflow_amount, config.overflow_tolerance
        )),
        FitClassification::Overflow if available_height <= 0.0 => Some(format!(
            "The header leaves no room for content \
             (content starts at {:.2}in, safe area ends at {:.2}in). \
             Shorten the title or subtitle, or move the content to a continuation slide.",
            content_top, max_content_bottom
        )),
        FitClassification::Overflow => Some(format!(
            "Content overflows the safe area by {:.2}in across {} blocks. \
             Split the content onto a continuation slide or reduce the number of blocks.",
            overflow_amount,
            heights.len()
        )),
    };

    if classification == FitClassification::Overflow {
        log::warn!(
            "Slide content overflow: actual_bottom={:.3}in max_content_bottom={:.3}in \
             overflow={:.3}in blocks=[{}]",
            actual_bottom,
            max_content_bottom,
            overflow_amount,
            breakdown
                .iter()
                .map(|b| format!("#{} {} {:.2}in", b.index, b.kind, b.height))
                .join(", ")
        );
    }

    OverflowReport {
        classification,
        overflow_amount_inches: overflow_amount,
        margin_inches: margin,
        recommendation,
        per_block_breakdown: breakdown,
        content_top,
        available_height,
        total_required_height: total,
        actual_bottom,
        max_content_bottom,
    }
}

fn stack_blocks(
    gap: f32,
    content_top: f32,
    available_height: f32,
    heights: &[(BlockKind, f32)],
) -> Vec<BlockMetrics> {
    let mut top = content_top;
    heights
        .iter()
        .enumerate()
        .map(|(index, &(kind, height))| {
            let bottom = top + height;
            let metrics = BlockMetrics {
                index,
                kind,
                height,
                top,
                bottom,
                exceeds_safe_area: bottom - content_top > available_height + EPSILON,
            };
            top = bottom + gap;
            metrics
        })
        .collect()
}
