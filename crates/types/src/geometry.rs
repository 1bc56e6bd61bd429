//! Vertical geometry primitives, all lengths in inches.
use serde::{Deserialize, Serialize};

/// The fixed slide surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// 16:9 widescreen, the default output format.
    pub fn widescreen() -> Self {
        Self {
            width: 13.333,
            height: 7.5,
        }
    }

    /// 4:3 standard.
    pub fn standard() -> Self {
        Self {
            width: 10.0,
            height: 7.5,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        self.width / self.height
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::widescreen()
    }
}

/// A `{top, height}` pair positioned on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VerticalSpan {
    pub top: f32,
    pub height: f32,
}

impl VerticalSpan {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Returns the span that starts `gap` below this one with the given height.
    pub fn stack_below(&self, gap: f32, height: f32) -> Self {
        Self {
            top: self.bottom() + gap,
            height,
        }
    }
}
