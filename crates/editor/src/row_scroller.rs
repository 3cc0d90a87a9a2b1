// Subsystem: docs/subsystems/viewport_scroll - Viewport mapping & scroll arithmetic
// Chunk: docs/chunks/row_scroller - Uniform-row scroll arithmetic
//!
//! Reusable scroll arithmetic for uniform-height rows.
//!
//! `RowScroller` tracks a scroll position in pixels along one axis and clamps
//! it so the content never scrolls past its start, nor past the point where
//! its end meets the end of the viewport. The vertical axis uses text lines as
//! rows; the horizontal axis uses glyph columns.
//!
//! The offset is kept as a positive distance (content start to viewport start).
//! The host-facing `ScrollOffset` is the negation of it.
//!
//! # Example
//!
//! ```ignore
//! use crate::row_scroller::RowScroller;
//!
//! let mut scroller = RowScroller::new(20.0); // 20px rows
//! scroller.update_size(60.0, 10); // 3 visible rows, 10 rows total
//!
//! // Put row 9 (the last) at the bottom of the viewport
//! scroller.ensure_visible(9, 10);
//! assert_eq!(scroller.scroll_offset_px(), 140.0);
//! ```

use std::ops::Range;

/// Scroll state and arithmetic for uniform-height row lists.
#[derive(Debug, Clone)]
pub struct RowScroller {
    /// Scroll position in pixels (distance from top of content to top of viewport)
    scroll_offset_px: f32,
    /// Viewport extent along this axis in pixels
    viewport_px: f32,
    /// Number of rows that fit fully in the viewport
    visible_rows: usize,
    /// Height of each row in pixels
    row_height: f32,
}

impl RowScroller {
    /// Creates a scroller at offset 0 with an empty viewport.
    ///
    /// Call `update_size()` before scrolling.
    pub fn new(row_height: f32) -> Self {
        Self {
            scroll_offset_px: 0.0,
            viewport_px: 0.0,
            visible_rows: 0,
            row_height,
        }
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Number of rows that fit fully in the viewport.
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn viewport_px(&self) -> f32 {
        self.viewport_px
    }

    /// The first row at least partly on screen.
    pub fn first_visible_row(&self) -> usize {
        if self.row_height <= 0.0 {
            return 0;
        }
        (self.scroll_offset_px / self.row_height).floor() as usize
    }

    /// The raw scroll offset in pixels.
    pub fn scroll_offset_px(&self) -> f32 {
        self.scroll_offset_px
    }

    /// Largest valid offset: content extent minus viewport extent, at least 0.
    pub fn max_offset_px(&self, row_count: usize) -> f32 {
        (row_count as f32 * self.row_height - self.viewport_px).max(0.0)
    }

    /// Returns true if all rows fit in the viewport at once.
    pub fn content_fits(&self, row_count: usize) -> bool {
        row_count as f32 * self.row_height <= self.viewport_px
    }

    /// Sets the scroll offset, clamped to `[0, max_offset_px]`.
    pub fn set_scroll_offset_px(&mut self, px: f32, row_count: usize) {
        let max = self.max_offset_px(row_count);
        self.scroll_offset_px = if px.is_nan() { 0.0 } else { px.clamp(0.0, max) };
    }

    /// Moves the offset by `delta_px`, clamped. Returns true if it changed.
    pub fn scroll_by(&mut self, delta_px: f32, row_count: usize) -> bool {
        let old = self.scroll_offset_px;
        self.set_scroll_offset_px(old + delta_px, row_count);
        self.scroll_offset_px != old
    }

    /// Resets the offset to the start of the content.
    pub fn reset(&mut self) {
        self.scroll_offset_px = 0.0;
    }

    /// Updates the viewport extent and re-clamps the offset.
    pub fn update_size(&mut self, viewport_px: f32, row_count: usize) {
        self.viewport_px = viewport_px.max(0.0);
        self.visible_rows = if self.row_height > 0.0 {
            (self.viewport_px / self.row_height).floor() as usize
        } else {
            0
        };
        self.set_scroll_offset_px(self.scroll_offset_px, row_count);
    }

    /// Rows at least partly visible: `[first, min(first + visible + 1, row_count))`.
    ///
    /// The `+1` covers the row cut off at the bottom when scrolled to a
    /// fractional position.
    pub fn visible_range(&self, row_count: usize) -> Range<usize> {
        let first = self.first_visible_row().min(row_count);
        let end = (first + self.visible_rows + 1).min(row_count);
        first..end
    }

    /// Scrolls so that `row` is at the top of the viewport (clamped).
    pub fn scroll_to(&mut self, row: usize, row_count: usize) {
        self.set_scroll_offset_px(row as f32 * self.row_height, row_count);
    }

    /// Scrolls the minimum whole-row amount that makes `row` fully visible.
    ///
    /// A row cut off at the top snaps to the top edge. A row at or past the
    /// last fully visible slot snaps to the bottom edge. Returns `true` if the
    /// offset changed.
    pub fn ensure_visible(&mut self, row: usize, row_count: usize) -> bool {
        let old = self.scroll_offset_px;
        let first = self.first_visible_row();
        let visible = self.visible_rows.max(1);

        if (row as f32) * self.row_height < self.scroll_offset_px {
            self.scroll_to(row, row_count);
        } else if row >= first + visible {
            let top = row + 1 - visible;
            self.scroll_to(top, row_count);
        }

        self.scroll_offset_px != old
    }
}
