//! Geometry and estimation constants injected into the engine.
//!
//! Every number the cascade or the overflow analyzer uses lives here, so
//! alternate canvases (4:3, custom) can be laid out without code changes.

use crate::LayoutError;
use serde::{Deserialize, Serialize};
use slidefit_types::Canvas;

/// Positional constants of the slide layout, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// The slide surface. Defaults to 13.333in x 7.5in.
    pub canvas: Canvas,
    /// Distance from the canvas top to the title. Defaults to `0.5`.
    pub top_margin: f32,
    /// Vertical gap between stacked elements. Defaults to `0.15`.
    pub gap: f32,
    /// Space reserved at the bottom of the canvas for footers and branding
    /// that this engine does not manage. Defaults to `0.3`.
    pub safety: f32,
    /// Upper bound on where the content region may start. A title long
    /// enough to push content below this point is clamped and flagged.
    /// Defaults to `2.8`.
    pub content_top_max: f32,
    /// How far content may spill past the safe bottom and still be accepted
    /// (classified `TIGHT`). Defaults to `0.15`.
    pub overflow_tolerance: f32,
    pub estimator: EstimatorConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::widescreen(),
            top_margin: 0.5,
            gap: 0.15,
            safety: 0.3,
            content_top_max: 2.8,
            overflow_tolerance: 0.15,
            estimator: EstimatorConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Same constants on a 4:3 canvas.
    pub fn standard() -> Self {
        Self {
            canvas: Canvas::standard(),
            ..Self::default()
        }
    }

    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Parses a (possibly partial) JSON configuration. Missing keys keep
    /// their default values.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: LayoutConfig =
            serde_json::from_str(json).map_err(|e| LayoutError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Lowest point content may reach: `canvas.height - safety`.
    pub fn max_content_bottom(&self) -> f32 {
        self.canvas.height - self.safety
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.canvas.width > 0.0 && self.canvas.width.is_finite()) {
            return Err(invalid(format!(
                "canvas width must be positive, got {}",
                self.canvas.width
            )));
        }
        if !(self.canvas.height > 0.0 && self.canvas.height.is_finite()) {
            return Err(invalid(format!(
                "canvas height must be positive, got {}",
                self.canvas.height
            )));
        }
        check_length("topMargin", self.top_margin)?;
        check_length("gap", self.gap)?;
        check_length("safety", self.safety)?;
        check_length("contentTopMax", self.content_top_max)?;
        check_length("overflowTolerance", self.overflow_tolerance)?;
        if self.top_margin >= self.canvas.height {
            return Err(invalid(format!(
                "topMargin {} does not fit on a canvas of height {}",
                self.top_margin, self.canvas.height
            )));
        }
        self.estimator.validate()
    }
}

/// Character-count heuristics used to estimate text footprints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EstimatorConfig {
    pub chars_per_line_title: usize,
    pub line_height_title: f32,
    pub min_title_height: f32,
    pub max_title_height: f32,

    pub chars_per_line_subtitle: usize,
    pub line_height_subtitle: f32,
    pub min_subtitle_height: f32,
    pub max_subtitle_height: f32,

    pub heading_base_height: f32,
    pub chars_per_line_heading: usize,
    pub heading_line_height: f32,

    /// Items longer than `chars_per_line_bullet` take two lines.
    pub line_height_bullet: f32,
    pub chars_per_line_bullet: usize,
    pub bullet_spacing: f32,

    pub callout_min_height: f32,
    pub chars_per_line_callout: usize,
    pub callout_line_height: f32,

    /// Images are a fixed-size placeholder; aspect ratio is not modelled.
    pub image_height: f32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            chars_per_line_title: 50,
            line_height_title: 0.5,
            min_title_height: 0.7,
            max_title_height: 1.5,

            chars_per_line_subtitle: 70,
            line_height_subtitle: 0.4,
            min_subtitle_height: 0.4,
            max_subtitle_height: 0.9,

            heading_base_height: 0.5,
            chars_per_line_heading: 60,
            heading_line_height: 0.35,

            line_height_bullet: 0.3,
            chars_per_line_bullet: 40,
            bullet_spacing: 0.05,

            callout_min_height: 0.8,
            chars_per_line_callout: 80,
            callout_line_height: 0.3,

            image_height: 3.0,
        }
    }
}

impl EstimatorConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        let widths = [
            ("charsPerLineTitle", self.chars_per_line_title),
            ("charsPerLineSubtitle", self.chars_per_line_subtitle),
            ("charsPerLineHeading", self.chars_per_line_heading),
            ("charsPerLineBullet", self.chars_per_line_bullet),
            ("charsPerLineCallout", self.chars_per_line_callout),
        ];
        for (name, value) in widths {
            if value == 0 {
                return Err(invalid(format!("{} must be at least 1", name)));
            }
        }

        let lengths = [
            ("lineHeightTitle", self.line_height_title),
            ("minTitleHeight", self.min_title_height),
            ("maxTitleHeight", self.max_title_height),
            ("lineHeightSubtitle", self.line_height_subtitle),
            ("minSubtitleHeight", self.min_subtitle_height),
            ("maxSubtitleHeight", self.max_subtitle_height),
            ("headingBaseHeight", self.heading_base_height),
            ("headingLineHeight", self.heading_line_height),
            ("lineHeightBullet", self.line_height_bullet),
            ("bulletSpacing", self.bullet_spacing),
            ("calloutMinHeight", self.callout_min_height),
            ("calloutLineHeight", self.callout_line_height),
            ("imageHeight", self.image_height),
        ];
        for (name, value) in lengths {
            check_length(name, value)?;
        }

        if self.min_title_height > self.max_title_height {
            return Err(invalid(format!(
                "minTitleHeight {} exceeds maxTitleHeight {}",
                self.min_title_height, self.max_title_height
            )));
        }
        if self.min_subtitle_height > self.max_subtitle_height {
            return Err(invalid(format!(
                "minSubtitleHeight {} exceeds maxSubtitleHeight {}",
                self.min_subtitle_height, self.max_subtitle_height
            )));
        }
        Ok(())
    }
}

fn check_length(name: &str, value: f32) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{} must be a finite, non-negative length, got {}", name, value)))
    }
}

fn invalid(message: String) -> LayoutError {
    LayoutError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contract_constants() {
        let config = LayoutConfig::default();
        assert_eq!(config.canvas, Canvas::new(13.333, 7.5));
        assert_eq!(config.top_margin, 0.5);
        assert_eq!(config.gap, 0.15);
        assert_eq!(config.safety, 0.3);
        assert_eq!(config.content_top_max, 2.8);
        assert_eq!(config.overflow_tolerance, 0.15);
        assert_eq!(config.estimator.min_title_height, 0.7);
        assert_eq!(config.estimator.max_title_height, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_content_bottom() {
        assert!((LayoutConfig::default().max_content_bottom() - 7.2).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LayoutConfig::from_json(
            r#"{
                "canvas": { "width": 10.0, "height": 7.5 },
                "estimator": { "imageHeight": 2.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.canvas, Canvas::standard());
        assert_eq!(config.gap, 0.15);
        assert_eq!(config.estimator.image_height, 2.0);
        assert_eq!(config.estimator.chars_per_line_title, 50);
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let err = LayoutConfig::from_json(r#"{ "gutter": 1.0 }"#).unwrap_err();
        assert!(matches!(err, LayoutError::ConfigParse(_)));
    }

    #[test]
    fn test_negative_gap_is_rejected() {
        let err = LayoutConfig::from_json(r#"{ "gap": -0.1 }"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig(msg) if msg.contains("gap")));
    }

    #[test]
    fn test_zero_chars_per_line_is_rejected() {
        let mut config = LayoutConfig::default();
        config.estimator.chars_per_line_bullet = 0;
        assert!(matches!(config.validate(), Err(LayoutError::InvalidConfig(_))));
    }

    #[test]
    fn test_inverted_title_clamp_is_rejected() {
        let mut config = LayoutConfig::default();
        config.estimator.min_title_height = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_top_margin_beyond_canvas_is_rejected() {
        let config = LayoutConfig {
            top_margin: 8.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_canvas_is_rejected() {
        let config = LayoutConfig::default().with_canvas(Canvas::new(f32::NAN, 7.5));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_standard_preset() {
        let config = LayoutConfig::standard();
        assert_eq!(config.canvas.width, 10.0);
        assert_eq!(config.top_margin, LayoutConfig::default().top_margin);
    }
}
