#![cfg(test)]

use crate::config::LayoutConfig;
use crate::engine::SlideLayoutEngine;
use crate::estimate::HeightEstimator;
use crate::overflow::{total_required_height, FitClassification};
use crate::split::suggested_split_index;
use crate::test_utils::text_of_len;
use crate::util::{approx_eq, approx_ge, float_slices_fuzzy_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slidefit_types::{ContentBlock, SlideContentModel};

const SAMPLES: usize = 500;

fn random_block(rng: &mut StdRng) -> ContentBlock {
    match rng.random_range(0..4) {
        0 => ContentBlock::heading(text_of_len(rng.random_range(0..140))),
        1 => {
            let count = rng.random_range(1..12);
            ContentBlock::BulletGroup {
                items: (0..count).map(|_| text_of_len(rng.random_range(0..90))).collect(),
            }
        }
        2 => ContentBlock::callout(text_of_len(rng.random_range(0..250))),
        _ => ContentBlock::image(text_of_len(rng.random_range(0..40))),
    }
}

fn random_model(rng: &mut StdRng) -> SlideContentModel {
    let mut model = SlideContentModel::new(text_of_len(rng.random_range(0..220)));
    if rng.random_bool(0.5) {
        model = model.with_subtitle(text_of_len(rng.random_range(0..200)));
    }
    let blocks = rng.random_range(0..7);
    model.with_blocks((0..blocks).map(|_| random_block(rng)))
}

fn random_models(seed: u64) -> Vec<SlideContentModel> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES).map(|_| random_model(&mut rng)).collect()
}

#[test]
fn test_layout_is_deterministic() {
    let engine = SlideLayoutEngine::default();
    for model in random_models(1) {
        assert_eq!(engine.layout(&model).unwrap(), engine.layout(&model).unwrap());
    }
}

#[test]
fn test_tops_and_heights_are_non_negative() {
    let engine = SlideLayoutEngine::default();
    for model in random_models(2) {
        let result = engine.layout(&model).unwrap();
        let layout = result.layout;
        assert!(layout.title_top >= 0.0 && layout.title_height >= 0.0);
        assert!(layout.subtitle_top.unwrap_or(0.0) >= 0.0);
        assert!(layout.subtitle_height.unwrap_or(0.0) >= 0.0);
        assert!(layout.content_top >= 0.0);
        for block in &result.report.per_block_breakdown {
            assert!(block.top >= 0.0 && block.height >= 0.0);
        }
    }
}

#[test]
fn test_header_elements_never_overlap() {
    let engine = SlideLayoutEngine::default();
    let gap = engine.config().gap;
    for model in random_models(3) {
        let layout = engine.layout(&model).unwrap().layout;
        if let Some(subtitle) = layout.subtitle_span() {
            assert!(approx_ge(subtitle.top, layout.title_bottom() + gap));
        }
        if !layout.title_dominant_layout {
            assert!(approx_ge(layout.content_top, layout.header_bottom() + gap));
        } else {
            assert!(approx_eq(layout.content_top, engine.config().content_top_max));
        }
    }
}

#[test]
fn test_total_height_matches_block_sum() {
    let engine = SlideLayoutEngine::default();
    let gap = engine.config().gap;
    for model in random_models(4) {
        let report = engine.layout(&model).unwrap().report;
        let heights: Vec<f32> = model
            .blocks
            .iter()
            .map(|b| engine.estimator().estimate_block_height(b))
            .collect();
        let breakdown: Vec<f32> = report.per_block_breakdown.iter().map(|b| b.height).collect();
        assert!(float_slices_fuzzy_eq(&heights, &breakdown));

        let gaps = gap * heights.len().saturating_sub(1) as f32;
        let expected: f32 = heights.iter().sum::<f32>() + gaps;
        assert!(approx_eq(report.total_required_height, expected));
        assert!(approx_eq(report.total_required_height, total_required_height(&heights, gap)));
    }
}

#[test]
fn test_fits_iff_no_overflow_amount() {
    let engine = SlideLayoutEngine::default();
    for model in random_models(5) {
        let report = engine.layout(&model).unwrap().report;
        assert_eq!(
            report.classification == FitClassification::Fits,
            report.overflow_amount_inches <= 0.0
        );
        assert!(approx_eq(
            report.overflow_amount_inches,
            report.actual_bottom - report.max_content_bottom
        ));
        if report.classification == FitClassification::Overflow {
            assert!(report.recommendation.as_deref().is_some_and(|r| !r.is_empty()));
        }
    }
}

#[test]
fn test_title_height_is_monotonic_below_clamp() {
    let estimator = HeightEstimator::default();
    // Three 50-character lines reach the 1.5in maximum.
    let mut previous = estimator.estimate_title_height("");
    for len in 1..=150 {
        let height = estimator.estimate_title_height(&text_of_len(len));
        assert!(height >= previous, "title of {} chars shrank", len);
        previous = height;
    }
}

#[test]
fn test_title_line_boundary() {
    let config = LayoutConfig::default();
    let estimator = HeightEstimator::new(config.estimator);
    let per_line = config.estimator.chars_per_line_title;

    let one_line = estimator.estimate_title_height(&text_of_len(per_line));
    let two_lines = estimator.estimate_title_height(&text_of_len(per_line + 1));

    assert!(approx_eq(one_line, config.estimator.min_title_height));
    assert!(approx_eq(two_lines, 2.0 * config.estimator.line_height_title));
    assert!(two_lines > one_line);
}

#[test]
fn test_split_advice_is_idempotent() {
    let engine = SlideLayoutEngine::default();
    for model in random_models(6) {
        let report = engine.layout(&model).unwrap().report;
        let first = suggested_split_index(&report);
        assert_eq!(first, suggested_split_index(&report));
        let splittable =
            report.classification == FitClassification::Overflow && !model.blocks.is_empty();
        assert_eq!(first.is_some(), splittable);
        if let Some(index) = first {
            assert!(index < model.blocks.len());
            assert!(report.per_block_breakdown[index].exceeds_safe_area);
        }
    }
}
