// Subsystem: docs/subsystems/viewport_scroll - Viewport mapping & scroll arithmetic
// Chunk: docs/chunks/viewport_scroller - Caret-following scroll policy
//!
//! The viewport scroller.
//!
//! `Viewport` owns the scroll offset and keeps it consistent with the
//! document. It never touches the buffer or the caret; it only reacts to the
//! notifications the cursor controller emits and to wheel input:
//!
//! - `CaretMoved`: scroll the minimum whole number of lines that brings the
//!   caret's line fully into view (see [`RowScroller::ensure_visible`]).
//! - `BufferChanged`: if the whole document fits, scroll to the top;
//!   otherwise follow a line insertion or removal by one line height.
//! - Wheel input: move by the scaled delta, clamped, ignoring the caret.
//!
//! Vertical scrolling delegates to a `RowScroller` over text lines, horizontal
//! scrolling to one over glyph columns in the text area right of the margin.

use std::ops::Range;

use caretpad_buffer::{BufferChange, ChangeKind, LineBuffer};
use caretpad_input::ScrollDelta;

use crate::caret::CaretPosition;
use crate::config::EditorConfig;
use crate::metrics::FontMetrics;
use crate::notification::Notification;
use crate::row_scroller::RowScroller;

/// Translation applied to every rendered line and to the caret.
///
/// Both components are `<= 0`; `(0, 0)` shows the top-left of the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

/// The visible pixel window onto the document.
#[derive(Debug, Clone)]
pub struct Viewport {
    vertical: RowScroller,
    horizontal: RowScroller,
    left_margin: f32,
    wheel_scale: f32,
}

impl Viewport {
    /// Creates a viewport at the top-left of a one-line document.
    pub fn new(config: &EditorConfig, metrics: &FontMetrics) -> Self {
        let mut viewport = Self {
            vertical: RowScroller::new(metrics.line_height),
            horizontal: RowScroller::new(metrics.advance_width),
            left_margin: metrics.left_margin,
            wheel_scale: config.wheel_scale,
        };
        viewport.resize(config.viewport_width, config.viewport_height, &LineBuffer::new());
        viewport
    }

    /// The current offset, as the non-positive translation renderers apply.
    pub fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset {
            x: 0.0 - self.horizontal.scroll_offset_px(),
            y: 0.0 - self.vertical.scroll_offset_px(),
        }
    }

    pub fn line_height(&self) -> f32 {
        self.vertical.row_height()
    }

    /// Number of lines that fit fully in the viewport.
    pub fn visible_lines(&self) -> usize {
        self.vertical.visible_rows()
    }

    /// 0-based indices of the lines at least partly on screen.
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        self.vertical.visible_range(line_count)
    }

    pub fn vertical(&self) -> &RowScroller {
        &self.vertical
    }

    pub fn horizontal(&self) -> &RowScroller {
        &self.horizontal
    }

    /// Applies a new viewport size and re-clamps the offset.
    pub fn resize(&mut self, width: f32, height: f32, buffer: &LineBuffer) {
        self.vertical.update_size(height, buffer.line_count());
        self.horizontal
            .update_size(width - self.left_margin, column_extent(buffer));
    }

    // ==================== Notifications ====================

    /// Reacts to one notification. Returns true if the offset changed.
    pub fn observe(&mut self, notification: &Notification, buffer: &LineBuffer) -> bool {
        match notification {
            Notification::BufferChanged(change) => self.on_buffer_changed(change, buffer),
            Notification::CaretMoved(position) => self.follow_caret(*position, buffer),
            Notification::Settled => false,
        }
    }

    /// Scrolls so that the caret's line (and column) are fully visible.
    pub fn follow_caret(&mut self, caret: CaretPosition, buffer: &LineBuffer) -> bool {
        let before = self.scroll_offset();
        self.vertical
            .ensure_visible(caret.line_index(), buffer.line_count());
        self.horizontal
            .ensure_visible(caret.column, column_extent(buffer));
        let moved = self.scroll_offset() != before;
        if moved {
            log::debug!("scrolled to {:?} following caret {caret}", self.scroll_offset());
        }
        moved
    }

    /// Adjusts the offset after a buffer mutation.
    pub fn on_buffer_changed(&mut self, change: &BufferChange, buffer: &LineBuffer) -> bool {
        let before = self.scroll_offset();
        let line_count = buffer.line_count();

        if change.kind == ChangeKind::Replaced {
            self.vertical.reset();
            self.horizontal.reset();
        } else if self.vertical.content_fits(line_count) {
            self.vertical.reset();
        } else if let Some(delta) = change.line_delta().filter(|d| *d != 0) {
            self.vertical
                .scroll_by(delta as f32 * self.line_height(), line_count);
        }
        // Removing text can shrink the widest line.
        let extent = column_extent(buffer);
        self.horizontal
            .set_scroll_offset_px(self.horizontal.scroll_offset_px(), extent);

        self.scroll_offset() != before
    }

    // ==================== Wheel ====================

    /// Applies wheel input. Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: ScrollDelta, buffer: &LineBuffer) -> bool {
        let dy = delta.dy as f32 * self.wheel_scale;
        let dx = delta.dx as f32 * self.wheel_scale;
        let v = self.vertical.scroll_by(dy, buffer.line_count());
        let h = self.horizontal.scroll_by(dx, column_extent(buffer));
        v || h
    }
}

/// Columns the horizontal scroller can reach: the widest line plus the slot
/// after its last glyph, where the caret can sit.
fn column_extent(buffer: &LineBuffer) -> usize {
    buffer.widest_line_len() + 1
}
