// Chunk: docs/chunks/glyph_metrics - Shared monospace projection constants
//!
//! Monospace layout metrics.
//!
//! Hit-testing and rendering both project (line, column) to pixels through
//! the one `FontMetrics` value the editor owns, so a click always lands on
//! the glyph the renderer drew there:
//! - x = column * advance_width
//! - y = (line - 1) * line_height

use crate::config::EditorConfig;

/// Metrics used for glyph layout and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Width of a single glyph (monospace assumption: all glyphs same width)
    pub advance_width: f32,
    /// Height of a line, also the caret height
    pub line_height: f32,
    /// Offset of column 0 from the widget's left edge
    pub left_margin: f32,
    /// Added to a click's y before converting to a line number
    pub baseline_adjust: f32,
    /// x position of the gutter rule
    pub gutter_width: f32,
}

impl FontMetrics {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            advance_width: config.font_size * config.fixed_pitch_ratio,
            line_height: config.line_height,
            left_margin: config.left_margin,
            baseline_adjust: config.baseline_adjust,
            gutter_width: config.gutter_width,
        }
    }

    /// Document-space y of the top of a 1-based line.
    pub fn line_top(&self, line: usize) -> f32 {
        line.saturating_sub(1) as f32 * self.line_height
    }

    /// Document-space x of a column, not counting the left margin.
    pub fn column_x(&self, column: usize) -> f32 {
        column as f32 * self.advance_width
    }

    /// The 1-based line under a document-space y, before clamping.
    pub fn line_at(&self, y: f32) -> i64 {
        ((y + self.baseline_adjust) / self.line_height).round() as i64
    }

    /// The column nearest a document-space x, before clamping.
    pub fn column_at(&self, x: f32) -> i64 {
        ((x - self.left_margin) / self.advance_width).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics::from_config(&EditorConfig::default())
    }

    #[test]
    fn test_advance_is_font_size_times_ratio() {
        let m = metrics();
        assert!((m.advance_width - 15.0 * 0.6001).abs() < 1e-4);
    }

    #[test]
    fn test_projection() {
        let m = metrics();
        assert_eq!(m.line_top(1), 0.0);
        assert_eq!(m.line_top(4), 60.0);
        assert_eq!(m.column_x(0), 0.0);
        assert!((m.column_x(10) - 90.015).abs() < 1e-3);
    }

    #[test]
    fn test_hit_test_rounds() {
        let m = metrics();
        // (16.7 + 3.3) / 20 = 1.0
        assert_eq!(m.line_at(16.7), 1);
        // (27.0 + 3.3) / 20 = 1.515 -> 2
        assert_eq!(m.line_at(27.0), 2);
        assert_eq!(m.column_at(24.0), 0);
        assert_eq!(m.column_at(24.0 + 2.6 * m.advance_width), 3);
        assert_eq!(m.column_at(0.0), -3);
    }
}
