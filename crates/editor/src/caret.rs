// Chunk: docs/chunks/caret - Single caret position and pixel projection

use std::fmt;

use crate::metrics::FontMetrics;

/// A caret position: 1-based line, 0-based column (in grapheme clusters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaretPosition {
    pub line: usize,
    pub column: usize,
}

impl CaretPosition {
    pub const START: CaretPosition = CaretPosition { line: 1, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The 0-based buffer index of this line.
    pub fn line_index(&self) -> usize {
        self.line.saturating_sub(1)
    }
}

impl Default for CaretPosition {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for CaretPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The caret's top-left corner in document space (no margin, no scroll).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CaretPixel {
    pub x: f32,
    pub y: f32,
}

/// The text insertion point.
///
/// `move_to` never checks bounds. The cursor controller is the only caller
/// and it clamps before moving.
#[derive(Debug, Clone, PartialEq)]
pub struct Caret {
    position: CaretPosition,
    pixel: CaretPixel,
}

impl Caret {
    pub fn new() -> Self {
        Self {
            position: CaretPosition::START,
            pixel: CaretPixel::default(),
        }
    }

    pub fn position(&self) -> CaretPosition {
        self.position
    }

    pub fn pixel(&self) -> CaretPixel {
        self.pixel
    }

    pub fn move_to(&mut self, line: usize, column: usize, metrics: &FontMetrics) {
        self.position = CaretPosition::new(line, column);
        self.pixel = CaretPixel {
            x: metrics.column_x(column),
            y: metrics.line_top(line),
        };
    }
}

impl Default for Caret {
    fn default() -> Self {
        Self::new()
    }
}
