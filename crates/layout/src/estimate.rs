//! Height estimation for titles, subtitles and content blocks.
//!
//! All heights are inches. Estimates come from character counts, not glyph
//! metrics, and are expected to be within roughly 5-20% of the rendered
//! footprint depending on font and kerning.

use crate::config::EstimatorConfig;
use slidefit_traits::{TextMeasurer, TextRole};
use slidefit_types::ContentBlock;

/// Counts lines as `ceil(chars / chars_per_line)` with a width per role.
///
/// Characters are Unicode scalar values, so accented text is not penalised
/// for its UTF-8 length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCountMeasurer {
    title: usize,
    subtitle: usize,
    heading: usize,
    bullet: usize,
    callout: usize,
}

impl CharCountMeasurer {
    pub fn new(config: &EstimatorConfig) -> Self {
        Self {
            title: config.chars_per_line_title,
            subtitle: config.chars_per_line_subtitle,
            heading: config.chars_per_line_heading,
            bullet: config.chars_per_line_bullet,
            callout: config.chars_per_line_callout,
        }
    }

    pub fn chars_per_line(&self, role: TextRole) -> usize {
        match role {
            TextRole::Title => self.title,
            TextRole::Subtitle => self.subtitle,
            TextRole::Heading => self.heading,
            TextRole::Bullet => self.bullet,
            TextRole::Callout => self.callout,
        }
    }
}

impl Default for CharCountMeasurer {
    fn default() -> Self {
        Self::new(&EstimatorConfig::default())
    }
}

impl TextMeasurer for CharCountMeasurer {
    fn count_lines(&self, text: &str, role: TextRole) -> usize {
        // A zero width would make every string infinitely tall; treat it as one char.
        let width = self.chars_per_line(role).max(1);
        text.chars().count().div_ceil(width)
    }

    fn name(&self) -> &'static str {
        "char-count"
    }
}

/// Turns slide text into vertical footprints.
///
/// Pure and total: every input, including empty strings and empty bullet
/// groups, maps to a finite non-negative height.
#[derive(Debug, Clone)]
pub struct HeightEstimator<M: TextMeasurer = CharCountMeasurer> {
    config: EstimatorConfig,
    measurer: M,
}

impl HeightEstimator<CharCountMeasurer> {
    pub fn new(config: EstimatorConfig) -> Self {
        let measurer = CharCountMeasurer::new(&config);
        Self { config, measurer }
    }
}

impl Default for HeightEstimator<CharCountMeasurer> {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

impl<M: TextMeasurer> HeightEstimator<M> {
    pub fn with_measurer(config: EstimatorConfig, measurer: M) -> Self {
        Self { config, measurer }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn estimate_title_height(&self, text: &str) -> f32 {
        let lines = self.measurer.count_lines(text, TextRole::Title);
        (lines as f32 * self.config.line_height_title)
            .clamp(self.config.min_title_height, self.config.max_title_height)
    }

    pub fn estimate_subtitle_height(&self, text: &str) -> f32 {
        let lines = self.measurer.count_lines(text, TextRole::Subtitle);
        (lines as f32 * self.config.line_height_subtitle)
            .clamp(self.config.min_subtitle_height, self.config.max_subtitle_height)
    }

    pub fn estimate_block_height(&self, block: &ContentBlock) -> f32 {
        let c = &self.config;
        match block {
            ContentBlock::Heading { text } => {
                let extra = self.extra_lines(text, TextRole::Heading);
                c.heading_base_height + extra as f32 * c.heading_line_height
            }
            ContentBlock::BulletGroup { items } => {
                let lines: f32 = items
                    .iter()
                    .map(|item| {
                        if self.measurer.wraps(item, TextRole::Bullet) {
                            2.0 * c.line_height_bullet
                        } else {
                            c.line_height_bullet
                        }
                    })
                    .sum();
                lines + items.len().saturating_sub(1) as f32 * c.bullet_spacing
            }
            ContentBlock::Callout { text } => {
                let extra = self.extra_lines(text, TextRole::Callout);
                c.callout_min_height + extra as f32 * c.callout_line_height
            }
            ContentBlock::Image { .. } => c.image_height,
        }
    }

    /// Lines beyond the first; empty text still occupies the base line.
    fn extra_lines(&self, text: &str, role: TextRole) -> usize {
        self.measurer.count_lines(text, role).max(1) - 1
    }
}
