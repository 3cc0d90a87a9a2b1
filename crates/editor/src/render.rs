// Chunk: docs/chunks/renderer_capability - Host renderer interface
//!
//! The renderer capability.
//!
//! The editor core does not draw. After every state change it builds a
//! [`RenderFrame`] (the lines on screen, already projected to pixels with the
//! scroll offset applied, and the caret's pixel position) and hands it to the
//! host's [`Renderer`]. The projection uses the same `FontMetrics` as
//! hit-testing.

use caretpad_buffer::DirtyLines;

use crate::caret::{CaretPixel, CaretPosition};
use crate::controller::CursorController;
use crate::viewport::{ScrollOffset, Viewport};

/// Something that can draw the editor.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame<'_>);
}

/// A renderer that discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &RenderFrame<'_>) {}
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &RenderFrame<'_>) {
        (**self).render(frame)
    }
}

/// One line as it should appear on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleLine<'a> {
    /// 1-based display index, as shown in the gutter
    pub number: usize,
    pub text: &'a str,
    /// x of column 0 in view space
    pub x: f32,
    /// y of the line's top in view space
    pub y: f32,
    /// Whether the line changed since the previous frame
    pub dirty: bool,
}

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame<'a> {
    /// Lines at least partly inside the viewport, in document order
    pub lines: Vec<VisibleLine<'a>>,
    pub caret: CaretPosition,
    /// Caret top-left in view space (margin and scroll applied)
    pub caret_pixel: CaretPixel,
    /// Caret height
    pub caret_height: f32,
    pub scroll: ScrollOffset,
    /// Set when the caret moved since the blink effect last settled
    pub just_moved: bool,
    /// Lines changed since the previous frame (0-based)
    pub dirty: DirtyLines,
    /// Total number of lines in the document
    pub line_count: usize,
}

impl RenderFrame<'_> {
    /// The texts of the visible lines, top to bottom.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text).collect()
    }
}

/// Projects the controller's state through the viewport.
pub fn build_frame<'a>(
    controller: &'a CursorController,
    viewport: &Viewport,
    dirty: DirtyLines,
) -> RenderFrame<'a> {
    let buffer = controller.buffer();
    let metrics = controller.metrics();
    let scroll = viewport.scroll_offset();
    let x = metrics.left_margin + scroll.x;

    let lines = viewport
        .visible_range(buffer.line_count())
        .map(|idx| VisibleLine {
            number: idx + 1,
            text: buffer.line_text(idx),
            x,
            y: metrics.line_top(idx + 1) + scroll.y,
            dirty: dirty.covers(idx),
        })
        .collect();

    let caret = controller.caret();
    let pixel = caret.pixel();
    RenderFrame {
        lines,
        caret: caret.position(),
        caret_pixel: CaretPixel {
            x: pixel.x + metrics.left_margin + scroll.x,
            y: pixel.y + scroll.y,
        },
        caret_height: metrics.line_height,
        scroll,
        just_moved: controller.just_moved(),
        dirty,
        line_count: buffer.line_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::controller::Command;
    use crate::metrics::FontMetrics;

    fn setup(text: &str, height: f32) -> (CursorController, Viewport) {
        let config = EditorConfig::with_viewport(400.0, height);
        let metrics = FontMetrics::from_config(&config);
        (
            CursorController::with_text(text, metrics),
            Viewport::new(&config, &metrics),
        )
    }

    #[test]
    fn test_frame_at_origin() {
        let (c, vp) = setup("ab\ncd", 60.0);
        let frame = build_frame(&c, &vp, DirtyLines::None);
        assert_eq!(frame.texts(), vec!["ab", "cd"]);
        assert_eq!(frame.lines[1].number, 2);
        assert_eq!(frame.lines[1].y, 20.0);
        assert_eq!(frame.lines[0].x, 24.0);
        assert_eq!(frame.caret_pixel, CaretPixel { x: 24.0, y: 0.0 });
        assert_eq!(frame.caret_height, 20.0);
    }

    #[test]
    fn test_frame_applies_scroll() {
        let (mut c, mut vp) = setup("0\n1\n2\n3\n4\n5\n6\n7\n8\n9", 60.0);
        for _ in 0..9 {
            c.apply(Command::MoveDown);
        }
        vp.follow_caret(c.position(), c.buffer());

        let frame = build_frame(&c, &vp, DirtyLines::None);
        assert_eq!(frame.scroll.y, -140.0);
        assert_eq!(frame.lines.first().map(|l| l.number), Some(8));
        assert_eq!(frame.lines.last().map(|l| l.y), Some(40.0));
        assert_eq!(frame.caret_pixel.y, 40.0);
        assert!(frame.just_moved);
    }

    #[test]
    fn test_frame_marks_dirty_lines() {
        let (c, vp) = setup("a\nb\nc", 60.0);
        let frame = build_frame(&c, &vp, DirtyLines::FromLineToEnd(1));
        let dirty: Vec<bool> = frame.lines.iter().map(|l| l.dirty).collect();
        assert_eq!(dirty, vec![false, true, true]);
    }
}
