#![allow(dead_code)]

pub mod fixtures;

use slidefit::{DeckReport, LayoutPipeline, PipelineBuilder, PipelineError};
use std::io::Write;
use tempfile::NamedTempFile;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const EPSILON: f32 = 1e-4;

/// Sequential pipeline with default configuration, for deterministic tests.
pub fn default_pipeline() -> LayoutPipeline {
    PipelineBuilder::new()
        .sequential()
        .build()
        .expect("default pipeline should build")
}

/// Parses `json` as a deck and lays it out with `pipeline`.
pub fn layout_deck_json(
    pipeline: &LayoutPipeline,
    json: &str,
) -> Result<DeckReport, PipelineError> {
    let deck = slidefit::Deck::from_json(json)?;
    Ok(pipeline.layout_deck(&deck))
}

/// Writes `contents` to a temporary file that lives as long as the handle.
pub fn temp_json(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

pub fn assert_close(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{}: expected {:.4}, got {:.4}",
        what,
        expected,
        actual
    );
}
