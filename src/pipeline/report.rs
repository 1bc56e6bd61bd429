//! Serializable results for a whole deck.

use crate::deck::Deck;
use serde::Serialize;
use slidefit_layout::{FitClassification, LayoutError, SlideLayout};
use std::sync::Arc;

/// Outcome for one slide: either a layout or the validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideEntry {
    pub index: usize,
    pub title: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub layout: Option<SlideLayout>,
    /// First block that would move to a continuation slide, for overflowing slides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub slides: usize,
    pub fits: usize,
    pub tight: usize,
    pub overflow: usize,
    pub invalid: usize,
    pub title_dominant: usize,
    /// Indices of slides classified `OVERFLOW`.
    pub overflowing_slides: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckReport {
    pub summary: DeckSummary,
    pub slides: Vec<SlideEntry>,
}

impl DeckReport {
    /// Pairs each slide of `deck` with its result. `results` must be in deck order.
    pub fn from_results(deck: &Deck, results: Vec<Result<Arc<SlideLayout>, LayoutError>>) -> Self {
        let mut summary = DeckSummary {
            slides: deck.len(),
            ..Default::default()
        };

        let slides = deck
            .slides
            .iter()
            .zip(results)
            .enumerate()
            .map(|(index, (model, result))| match result {
                Ok(layout) => {
                    match layout.report.classification {
                        FitClassification::Fits => summary.fits += 1,
                        FitClassification::Tight => summary.tight += 1,
                        FitClassification::Overflow => {
                            summary.overflow += 1;
                            summary.overflowing_slides.push(index);
                        }
                    }
                    if layout.layout.title_dominant_layout {
                        summary.title_dominant += 1;
                    }
                    let split_index = layout.split_advice(&model.blocks).map(|a| a.split_index);
                    SlideEntry {
                        index,
                        title: model.title.clone(),
                        layout: Some(SlideLayout::clone(&layout)),
                        split_index,
                        error: None,
                    }
                }
                Err(e) => {
                    summary.invalid += 1;
                    SlideEntry {
                        index,
                        title: model.title.clone(),
                        layout: None,
                        split_index: None,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect();

        Self { summary, slides }
    }

    pub fn has_invalid_slides(&self) -> bool {
        self.summary.invalid > 0
    }
}
