//! TextMeasurer trait for abstracting line counting.
//!
//! The layout engine never looks at glyphs directly. It asks a measurer how
//! many lines a piece of text occupies in a given role, so a font-metrics
//! backed implementation can replace the character-count heuristic without
//! touching the cascade or overflow logic.

use std::fmt::{self, Debug};

/// The typographic role a piece of text plays on the slide.
///
/// Each role has its own line width, so the same string wraps differently
/// as a title than as a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Title,
    Subtitle,
    Heading,
    Bullet,
    Callout,
}

impl TextRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextRole::Title => "title",
            TextRole::Subtitle => "subtitle",
            TextRole::Heading => "heading",
            TextRole::Bullet => "bullet",
            TextRole::Callout => "callout",
        }
    }
}

impl fmt::Display for TextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trait for estimating how many lines text wraps to.
///
/// Implementations must be pure: the same `(text, role)` always yields the
/// same count. Empty text yields `0`; callers decide the minimum footprint.
///
/// # Implementations
///
/// - `CharCountMeasurer` (in `slidefit-layout`): ceil(chars / chars_per_line)
///
/// # Example
///
/// ```ignore
/// let measurer = CharCountMeasurer::new(&EstimatorConfig::default());
/// assert_eq!(measurer.count_lines("Hello", TextRole::Title), 1);
/// ```
pub trait TextMeasurer: Send + Sync + Debug {
    /// Number of lines `text` occupies when set in `role`.
    fn count_lines(&self, text: &str, role: TextRole) -> usize;

    /// Whether `text` needs more than one line in `role`.
    fn wraps(&self, text: &str, role: TextRole) -> bool {
        self.count_lines(text, role) > 1
    }

    /// Get the name of this measurer for debugging.
    fn name(&self) -> &'static str;
}
