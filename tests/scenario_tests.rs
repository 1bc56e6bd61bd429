mod common;

use common::fixtures::{
    deck, empty_slide, kubernetes_intro, long_title_with_subtitle, overflowing_bullets,
};
use common::{TestResult, assert_close, default_pipeline, layout_deck_json};
use slidefit::FitClassification;

#[test]
fn test_short_title_three_bullets_fits() -> TestResult {
    let report = layout_deck_json(&default_pipeline(), &deck(vec![kubernetes_intro()]))?;
    let layout = report.slides[0].layout.as_ref().expect("slide should lay out");

    assert_eq!(layout.report.classification, FitClassification::Fits);
    assert_close(layout.layout.content_top, 1.35, "content_top");
    assert_eq!(layout.layout.subtitle_top, None);
    Ok(())
}

#[test]
fn test_long_title_does_not_overlap_subtitle() -> TestResult {
    let report = layout_deck_json(&default_pipeline(), &deck(vec![long_title_with_subtitle()]))?;
    let layout = &report.slides[0].layout.as_ref().expect("slide should lay out").layout;

    let subtitle_top = layout.subtitle_top.expect("subtitle present");
    assert!(subtitle_top >= 1.5, "subtitle_top was {}", subtitle_top);
    assert!(subtitle_top >= layout.title_top + layout.title_height + 0.15 - common::EPSILON);
    assert!(layout.is_overlap_free(0.15));
    Ok(())
}

#[test]
fn test_twenty_wrapping_bullets_overflow() -> TestResult {
    let report = layout_deck_json(&default_pipeline(), &deck(vec![overflowing_bullets()]))?;
    let entry = &report.slides[0];
    let overflow = &entry.layout.as_ref().expect("slide should lay out").report;

    assert_eq!(overflow.classification, FitClassification::Overflow);
    assert_eq!(
        overflow.overflow_amount_inches,
        overflow.actual_bottom - overflow.max_content_bottom
    );
    assert!(!overflow.recommendation.as_deref().unwrap_or_default().is_empty());
    assert_eq!(entry.split_index, Some(0));
    assert_eq!(report.summary.overflowing_slides, vec![0]);
    Ok(())
}

#[test]
fn test_empty_blocks_fit_trivially() -> TestResult {
    let report = layout_deck_json(&default_pipeline(), &deck(vec![empty_slide()]))?;
    let overflow = &report.slides[0].layout.as_ref().expect("slide should lay out").report;

    assert_eq!(overflow.total_required_height, 0.0);
    assert_eq!(overflow.classification, FitClassification::Fits);
    Ok(())
}

#[test]
fn test_repeated_layout_is_identical() -> TestResult {
    let json = deck(vec![kubernetes_intro(), long_title_with_subtitle(), overflowing_bullets()]);
    let pipeline = default_pipeline();
    let first = layout_deck_json(&pipeline, &json)?;
    let second = layout_deck_json(&pipeline, &json)?;
    assert_eq!(first, second);
    Ok(())
}
