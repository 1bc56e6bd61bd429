//! Split advice for overflowing slides.
//!
//! This is a foundation only: it names the block where a continuation slide
//! would begin. Creating the continuation slide, choosing its title and
//! re-running layout on the remainder are left to the caller.

use crate::overflow::OverflowReport;
use serde::Serialize;
use slidefit_types::ContentBlock;

/// The unchanged block list plus the suggested split point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitAdvice<'a> {
    pub blocks: &'a [ContentBlock],
    /// Index of the first block whose cumulative bottom, measured from the
    /// content start, exceeds the available height.
    pub split_index: usize,
}

impl<'a> SplitAdvice<'a> {
    /// Blocks that stay on the current slide.
    pub fn kept(&self) -> &'a [ContentBlock] {
        &self.blocks[..self.split_index]
    }

    /// Blocks that would move to a continuation slide.
    pub fn carried_over(&self) -> &'a [ContentBlock] {
        &self.blocks[self.split_index..]
    }
}

/// Index where a split would begin, or `None` unless the report is `OVERFLOW`.
pub fn suggested_split_index(report: &OverflowReport) -> Option<usize> {
    if !report.is_overflow() {
        return None;
    }
    report
        .per_block_breakdown
        .iter()
        .find(|block| block.exceeds_safe_area)
        .map(|block| block.index)
}

/// Pairs `blocks` with the split index derived from `report`.
///
/// `blocks` must be the list the report was computed from; a length
/// mismatch yields no advice.
pub fn advise_split<'a>(
    report: &OverflowReport,
    blocks: &'a [ContentBlock],
) -> Option<SplitAdvice<'a>> {
    if blocks.len() != report.per_block_breakdown.len() {
        log::debug!(
            "Ignoring split request: report has {} blocks, caller passed {}",
            report.per_block_breakdown.len(),
            blocks.len()
        );
        return None;
    }
    let split_index = suggested_split_index(report)?;
    Some(SplitAdvice { blocks, split_index })
}
