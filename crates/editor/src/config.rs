// Chunk: docs/chunks/editor_config - Pixel projection and timing settings
//!
//! Widget configuration.
//!
//! Every option here affects only the pixel projection (where glyphs and the
//! caret land) or the settle timing. None of them change editing semantics.
//! The defaults reproduce the original widget's look: 15px text with a 20px
//! line pitch, a 24px left margin and a gutter rule at x = 20.
//!
//! The viewport size has no sane default, so it defaults to zero and is
//! rejected by [`EditorConfig::validate`] until the host provides it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error;

/// Ratio of glyph advance to font size for the monospace faces the widget targets.
pub const DEFAULT_FIXED_PITCH_RATIO: f32 = 0.6001;

/// Configuration for an [`Editor`](crate::Editor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Font size in pixels
    pub font_size: f32,
    /// Vertical distance between baselines, also the caret height
    pub line_height: f32,
    /// Horizontal offset of column 0 from the widget's left edge
    pub left_margin: f32,
    /// Added to a click's y before dividing by the line height
    pub baseline_adjust: f32,
    /// Glyph advance = `font_size * fixed_pitch_ratio`
    pub fixed_pitch_ratio: f32,
    /// x position of the gutter rule; the pointer is a text beam right of it
    pub gutter_width: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Multiplier applied to wheel deltas
    pub wheel_scale: f32,
    /// Quiescence delay after a keystroke, in milliseconds
    pub key_settle_ms: u64,
    /// Quiescence delay after a mouse-up, in milliseconds
    pub mouse_settle_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 15.0,
            line_height: 20.0,
            left_margin: 24.0,
            baseline_adjust: 3.3,
            fixed_pitch_ratio: DEFAULT_FIXED_PITCH_RATIO,
            gutter_width: 20.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            wheel_scale: 0.5,
            key_settle_ms: 500,
            mouse_settle_ms: 300,
        }
    }
}

/// A configuration value that no scrolling or projection policy can work with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport {axis} must be a positive, finite number of pixels (got {value})")]
    InvalidViewport { axis: &'static str, value: f32 },

    #[error("{field} must be positive and finite (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("viewport height {viewport_height}px cannot fit one {line_height}px line")]
    ViewportTooShort {
        viewport_height: f32,
        line_height: f32,
    },
}

impl EditorConfig {
    /// Default settings for a viewport of the given size.
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    /// Parses a JSON object and validates it. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive the widget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(err) = &result {
            log::warn!("rejecting editor config: {err}");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (axis, value) in [
            ("width", self.viewport_width),
            ("height", self.viewport_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidViewport { axis, value });
            }
        }
        for (field, value) in [
            ("font_size", self.font_size),
            ("line_height", self.line_height),
            ("fixed_pitch_ratio", self.fixed_pitch_ratio),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.viewport_height < self.line_height {
            return Err(ConfigError::ViewportTooShort {
                viewport_height: self.viewport_height,
                line_height: self.line_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_widget() {
        let config = EditorConfig::default();
        assert_eq!(config.font_size, 15.0);
        assert_eq!(config.line_height, 20.0);
        assert_eq!(config.left_margin, 24.0);
        assert_eq!(config.gutter_width, 20.0);
        assert_eq!(config.wheel_scale, 0.5);
        assert_eq!(config.key_settle_ms, 500);
        assert_eq!(config.mouse_settle_ms, 300);
    }

    // ==================== validate ====================

    #[test]
    fn test_default_viewport_is_rejected() {
        let err = EditorConfig::default().validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidViewport {
                axis: "width",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_with_viewport_validates() {
        assert!(EditorConfig::with_viewport(400.0, 300.0).validate().is_ok());
    }

    #[test]
    fn test_nan_viewport_is_rejected() {
        let config = EditorConfig::with_viewport(400.0, f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidViewport { axis: "height", .. })
        ));
    }

    #[test]
    fn test_zero_line_height_is_rejected() {
        let config = EditorConfig {
            line_height: 0.0,
            ..EditorConfig::with_viewport(400.0, 300.0)
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "line_height",
                ..
            })
        ));
    }

    #[test]
    fn test_viewport_shorter_than_a_line_is_rejected() {
        let config = EditorConfig::with_viewport(400.0, 10.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ViewportTooShort { .. })
        ));
    }

    // ==================== from_json ====================

    #[test]
    fn test_from_json_fills_defaults() {
        let config =
            EditorConfig::from_json(r#"{"viewport_width": 640, "viewport_height": 480}"#).unwrap();
        assert_eq!(config.viewport_height, 480.0);
        assert_eq!(config.line_height, 20.0);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let result = EditorConfig::from_json(r#"{"viewport_width": 1, "colour": "red"}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_validates() {
        let result = EditorConfig::from_json(r#"{"font_size": 12}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
