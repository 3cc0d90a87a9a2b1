// Chunk: docs/chunks/editor_composition - Single dispatch point for input
//!
//! The composed editing widget.
//!
//! `Editor` wires the cursor controller, the viewport scroller, the
//! notification bus, the settle timer and the host's renderer together, and
//! is the single dispatch point for key, pointer and wheel input. All
//! handling is synchronous: each call applies one transition, lets the
//! viewport react to its notifications, forwards them to subscribers, and
//! renders one frame if anything changed.
//!
//! Time never advances on its own. The host passes `now` into the input
//! handlers and calls [`Editor::tick`] from its own timer to let the settle
//! delay expire.

use std::time::{Duration, Instant};

use caretpad_buffer::{DirtyLines, LineBuffer};
use caretpad_input::{KeyEvent, MouseEvent, MouseEventKind, ScrollDelta};

use crate::caret::CaretPosition;
use crate::config::{ConfigError, EditorConfig};
use crate::controller::{CursorController, Transition};
use crate::metrics::FontMetrics;
use crate::notification::{Notification, NotificationBus, SubscriberId};
use crate::render::{build_frame, NullRenderer, Renderer};
use crate::settle::SettleTimer;
use crate::viewport::{ScrollOffset, Viewport};

/// Pointer appearance the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerShape {
    /// Over the gutter
    Default,
    /// Over the text area
    Text,
}

/// The editing widget.
pub struct Editor<R: Renderer = NullRenderer> {
    config: EditorConfig,
    controller: CursorController,
    viewport: Viewport,
    bus: NotificationBus,
    settle: SettleTimer,
    renderer: R,
    /// Lines changed since the last rendered frame
    pending_dirty: DirtyLines,
}

impl<R: Renderer> Editor<R> {
    /// Creates an editor with an empty document.
    ///
    /// Fails if the configuration cannot drive the widget (a zero-sized
    /// viewport, for instance).
    pub fn new(config: EditorConfig, renderer: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let metrics = FontMetrics::from_config(&config);
        let viewport = Viewport::new(&config, &metrics);
        log::debug!(
            "editor created: {}x{} viewport, {} visible lines",
            config.viewport_width,
            config.viewport_height,
            viewport.visible_lines()
        );
        Ok(Self {
            controller: CursorController::new(metrics),
            viewport,
            bus: NotificationBus::new(),
            settle: SettleTimer::new(),
            renderer,
            pending_dirty: DirtyLines::FromLineToEnd(0),
            config,
        })
    }

    // ==================== Accessors ====================

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn buffer(&self) -> &LineBuffer {
        self.controller.buffer()
    }

    pub fn controller(&self) -> &CursorController {
        &self.controller
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn caret_position(&self) -> CaretPosition {
        self.controller.position()
    }

    pub fn scroll_offset(&self) -> ScrollOffset {
        self.viewport.scroll_offset()
    }

    /// The whole document with lines joined by `'\n'`.
    pub fn text(&self) -> String {
        self.controller.buffer().text()
    }

    pub fn just_moved(&self) -> bool {
        self.controller.just_moved()
    }

    /// Reads and clears the `just_moved` flag; called by the blink effect.
    pub fn take_just_moved(&mut self) -> bool {
        self.controller.take_just_moved()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // ==================== Subscribers ====================

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Notification) + 'static) -> SubscriberId {
        self.bus.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.bus.unsubscribe(id)
    }

    // ==================== Input ====================

    /// Handles a key press. Returns true if the document or caret changed.
    pub fn handle_key(&mut self, event: &KeyEvent, now: Instant) -> bool {
        log::trace!("key {:?} {:?}", event.key, event.modifiers);
        self.settle
            .arm(now, Duration::from_millis(self.config.key_settle_ms));
        let transition = self.controller.handle_key(event);
        self.dispatch(transition)
    }

    /// Handles a pointer event and returns the pointer shape to show.
    ///
    /// A press places the caret at the clicked glyph boundary; a release
    /// starts the settle delay.
    pub fn handle_mouse(&mut self, event: &MouseEvent, now: Instant) -> PointerShape {
        let (x, y) = (event.position.0 as f32, event.position.1 as f32);
        log::trace!("mouse {:?} at ({x}, {y})", event.kind);

        match event.kind {
            MouseEventKind::Down => {
                // view = document + scroll, and scroll is non-positive
                let scroll = self.viewport.scroll_offset();
                let transition = self.controller.click_at(x - scroll.x, y - scroll.y);
                self.dispatch(transition);
            }
            MouseEventKind::Up => {
                self.settle
                    .arm(now, Duration::from_millis(self.config.mouse_settle_ms));
            }
            MouseEventKind::Moved => {}
        }

        if x > self.config.gutter_width {
            PointerShape::Text
        } else {
            PointerShape::Default
        }
    }

    /// Handles wheel input. Returns true if the view scrolled.
    pub fn handle_scroll(&mut self, delta: ScrollDelta) -> bool {
        log::trace!("wheel ({}, {})", delta.dx, delta.dy);
        if !self.viewport.scroll_by(delta, self.controller.buffer()) {
            return false;
        }
        self.pending_dirty.merge(DirtyLines::FromLineToEnd(0));
        self.render();
        true
    }

    /// Advances the settle timer. Returns true if input just settled.
    ///
    /// On settling the `just_moved` flag is cleared, `Settled` is emitted and
    /// a frame is rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.settle.poll(now) {
            return false;
        }
        self.controller.clear_just_moved();
        self.bus.emit(&Notification::Settled);
        self.render();
        true
    }

    // ==================== Host operations ====================

    /// Replaces the document, moving the caret and the view to the top.
    pub fn set_text(&mut self, text: &str) {
        let transition = self.controller.set_text(text);
        self.dispatch(transition);
    }

    /// Applies a new viewport size.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        let config = EditorConfig {
            viewport_width: width,
            viewport_height: height,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        self.viewport.resize(width, height, self.controller.buffer());
        self.pending_dirty.merge(DirtyLines::FromLineToEnd(0));
        self.render();
        Ok(())
    }

    /// Renders a full frame.
    pub fn redraw(&mut self) {
        self.pending_dirty.merge(DirtyLines::FromLineToEnd(0));
        self.render();
    }

    // ==================== Dispatch ====================

    fn dispatch(&mut self, transition: Transition) -> bool {
        if transition.is_noop() {
            return false;
        }
        self.pending_dirty.merge(transition.dirty);

        for notification in &transition.notifications {
            if self.viewport.observe(notification, self.controller.buffer()) {
                self.pending_dirty.merge(DirtyLines::FromLineToEnd(0));
            }
            self.bus.emit(notification);
        }

        self.render();
        true
    }

    fn render(&mut self) {
        let dirty = std::mem::take(&mut self.pending_dirty);
        let frame = build_frame(&self.controller, &self.viewport, dirty);
        self.renderer.render(&frame);
    }
}

impl<R: Renderer> std::fmt::Debug for Editor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("caret", &self.controller.position())
            .field("lines", &self.controller.buffer().line_count())
            .field("scroll", &self.viewport.scroll_offset())
            .field("bus", &self.bus)
            .finish()
    }
}
