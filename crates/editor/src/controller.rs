// Chunk: docs/chunks/cursor_controller - Caret/line-buffer state machine
//!
//! The cursor controller: the state machine that keeps the line buffer and
//! the caret in agreement.
//!
//! It is the only component that mutates the buffer or moves the caret. Every
//! input is first resolved to a [`Command`] by the pure [`resolve_command`],
//! then applied by [`CursorController::apply`]. Every invalid combination
//! (Backspace at the start of the document, ArrowUp on line 1, ...) is a
//! guarded no-op, so any key sequence leaves the caret inside the buffer.
//!
//! Each transition reports which lines need redrawing and the notifications
//! it produced. Structural edits that move the caret to another line report
//! `BufferChanged` before `CaretMoved`.

use caretpad_buffer::{grapheme, BufferChange, ChangeKind, DirtyLines, LineBuffer};
use caretpad_input::{Key, KeyEvent};

use crate::caret::{Caret, CaretPosition};
use crate::metrics::FontMetrics;
use crate::notification::Notification;

/// Editing commands understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert a printable character at the caret
    InsertChar(char),
    /// Backspace
    DeleteBackward,
    /// Enter: split the line or open a new one
    InsertNewline,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
}

/// Resolves a key event to a command.
///
/// This is a pure stateless function: (modifiers, key) → Option<Command>.
/// A printable key held with Ctrl, Alt or Meta is a host shortcut (Ctrl+V
/// paste in particular), so the literal character is not typed. Keys with no
/// editing meaning (Shift, Tab, Escape, ...) resolve to `None`.
pub fn resolve_command(event: &KeyEvent) -> Option<Command> {
    let mods = &event.modifiers;

    match &event.key {
        Key::Char(ch) if !mods.has_chord_modifier() && !ch.is_control() => {
            Some(Command::InsertChar(*ch))
        }
        Key::Backspace => Some(Command::DeleteBackward),
        Key::Return => Some(Command::InsertNewline),
        Key::Left => Some(Command::MoveLeft),
        Key::Right => Some(Command::MoveRight),
        Key::Up => Some(Command::MoveUp),
        Key::Down => Some(Command::MoveDown),
        _ => None,
    }
}

/// What a single transition did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    /// Lines whose rendering changed (0-based)
    pub dirty: DirtyLines,
    /// Notifications in emission order
    pub notifications: Vec<Notification>,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }

    /// Returns true if the transition changed nothing.
    pub fn is_noop(&self) -> bool {
        self.dirty.is_none() && self.notifications.is_empty()
    }

    /// Returns true if the buffer was mutated.
    pub fn changed_buffer(&self) -> bool {
        self.notifications.iter().any(Notification::is_buffer_change)
    }
}

/// Owns the line buffer and the caret.
#[derive(Debug, Clone)]
pub struct CursorController {
    buffer: LineBuffer,
    caret: Caret,
    metrics: FontMetrics,
    /// Set on every caret-affecting action, cleared by the blink tick
    just_moved: bool,
}

impl CursorController {
    /// Creates a controller with an empty document and the caret at (1, 0).
    pub fn new(metrics: FontMetrics) -> Self {
        Self {
            buffer: LineBuffer::new(),
            caret: Caret::new(),
            metrics,
            just_moved: false,
        }
    }

    /// Creates a controller over existing text with the caret at (1, 0).
    pub fn with_text(text: &str, metrics: FontMetrics) -> Self {
        Self {
            buffer: LineBuffer::from_text(text),
            ..Self::new(metrics)
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn caret(&self) -> &Caret {
        &self.caret
    }

    pub fn position(&self) -> CaretPosition {
        self.caret.position()
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn just_moved(&self) -> bool {
        self.just_moved
    }

    /// Reads and clears the `just_moved` flag.
    pub fn take_just_moved(&mut self) -> bool {
        std::mem::take(&mut self.just_moved)
    }

    pub fn clear_just_moved(&mut self) {
        self.just_moved = false;
    }

    // ==================== Dispatch ====================

    /// Resolves and applies a key event. Unrecognized keys are no-ops.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Transition {
        match resolve_command(event) {
            Some(cmd) => self.apply(cmd),
            None => {
                log::trace!("ignoring key {:?} with {:?}", event.key, event.modifiers);
                Transition::none()
            }
        }
    }

    /// Applies one editing command.
    pub fn apply(&mut self, cmd: Command) -> Transition {
        let transition = match cmd {
            Command::InsertChar(ch) => self.insert_char(ch),
            Command::DeleteBackward => self.delete_backward(),
            Command::InsertNewline => self.insert_newline(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
        };
        self.assert_caret_in_bounds();
        transition
    }

    /// Places the caret at the glyph boundary nearest a document-space point.
    ///
    /// The point must already have the scroll offset removed. The line and
    /// column are clamped into the document, so any point yields a valid caret.
    pub fn click_at(&mut self, x: f32, y: f32) -> Transition {
        let count = self.buffer.line_count();
        let line = self.metrics.line_at(y).clamp(1, count as i64) as usize;
        let len = self.buffer.line_len(line - 1);
        let column = self.metrics.column_at(x).clamp(0, len as i64) as usize;

        log::debug!("click at ({x}, {y}) -> {line}:{column}");
        let old_line = self.caret.position().line;
        let transition = self.caret_moved(line, column, old_line);
        self.assert_caret_in_bounds();
        transition
    }

    /// Replaces the whole document and returns the caret to (1, 0).
    pub fn set_text(&mut self, text: &str) -> Transition {
        let dirty = self.buffer.replace_all(text);
        self.move_caret(1, 0);
        log::debug!("document replaced ({} lines)", self.buffer.line_count());
        Transition {
            dirty,
            notifications: vec![
                Notification::BufferChanged(BufferChange::new(ChangeKind::Replaced, 0)),
                Notification::CaretMoved(CaretPosition::START),
            ],
        }
    }

    // ==================== Editing ====================

    fn insert_char(&mut self, ch: char) -> Transition {
        let CaretPosition { line, column } = self.caret.position();
        let idx = line - 1;
        let next = grapheme::column_after_insert(self.buffer.line_text(idx), column, ch);
        let dirty = self.buffer.insert_char(idx, column, ch);
        self.move_caret(line, next);
        Self::edited(dirty, ChangeKind::LineEdited, idx, None)
    }

    fn delete_backward(&mut self) -> Transition {
        let CaretPosition { line, column } = self.caret.position();
        let idx = line - 1;

        if column > 0 {
            let dirty = self.buffer.delete_char_before(idx, column);
            self.move_caret(line, column - 1);
            return Self::edited(dirty, ChangeKind::LineEdited, idx, None);
        }
        if line == 1 {
            return Transition::none();
        }

        let prev_len = self.buffer.line_len(idx - 1);
        let dirty = if self.buffer.line_len(idx) == 0 {
            self.buffer.remove_line(idx)
        } else {
            self.buffer.merge_with_previous(idx)
        };
        self.move_caret(line - 1, prev_len);
        log::debug!("line {line} joined onto line {}", line - 1);
        Self::edited(dirty, ChangeKind::LineRemoved, idx, Some(self.caret.position()))
    }

    fn insert_newline(&mut self) -> Transition {
        let CaretPosition { line, column } = self.caret.position();
        let idx = line - 1;
        let len = self.buffer.line_len(idx);

        let (dirty, added) = if column == 0 {
            // Open a line above; the current line moves down with the caret.
            (self.buffer.insert_line(idx, ""), idx)
        } else if column >= len {
            (self.buffer.insert_line(idx + 1, ""), idx + 1)
        } else {
            (self.buffer.split_line(idx, column), idx + 1)
        };
        self.move_caret(line + 1, 0);
        log::debug!("new line at {} (caret {})", added + 1, self.caret.position());
        Self::edited(dirty, ChangeKind::LineAdded, added, Some(self.caret.position()))
    }

    // ==================== Movement ====================

    fn move_left(&mut self) -> Transition {
        let CaretPosition { line, column } = self.caret.position();
        if column > 0 {
            self.caret_moved(line, column - 1, line)
        } else if line > 1 {
            let prev_len = self.buffer.line_len(line - 2);
            self.caret_moved(line - 1, prev_len, line)
        } else {
            Transition::none()
        }
    }

    fn move_right(&mut self) -> Transition {
        let CaretPosition { line, column } = self.caret.position();
        if column < self.buffer.line_len(line - 1) {
            self.caret_moved(line, column + 1, line)
        } else if line < self.buffer.line_count() {
            self.caret_moved(line + 1, 0, line)
        } else {
            Transition::none()
        }
    }

    fn move_up(&mut self) -> Transition {
        let CaretPosition { line, column } = self.caret.position();
        if line == 1 {
            return Transition::none();
        }
        let column = column.min(self.buffer.line_len(line - 2));
        self.caret_moved(line - 1, column, line)
    }

    fn move_down(&mut self) -> Transition {
        let CaretPosition { line, column } = self.caret.position();
        if line >= self.buffer.line_count() {
            return Transition::none();
        }
        let column = column.min(self.buffer.line_len(line));
        self.caret_moved(line + 1, column, line)
    }

    // ==================== Helpers ====================

    fn move_caret(&mut self, line: usize, column: usize) {
        self.caret.move_to(line, column, &self.metrics);
        self.just_moved = true;
    }

    /// A pure caret move: redraw the old and new caret lines.
    fn caret_moved(&mut self, line: usize, column: usize, old_line: usize) -> Transition {
        self.move_caret(line, column);
        let mut dirty = DirtyLines::Single(old_line - 1);
        dirty.merge(DirtyLines::Single(line - 1));
        Transition {
            dirty,
            notifications: vec![Notification::CaretMoved(self.caret.position())],
        }
    }

    fn edited(
        dirty: DirtyLines,
        kind: ChangeKind,
        index: usize,
        moved_to: Option<CaretPosition>,
    ) -> Transition {
        let mut notifications = vec![Notification::BufferChanged(BufferChange::new(kind, index))];
        notifications.extend(moved_to.map(Notification::CaretMoved));
        Transition {
            dirty,
            notifications,
        }
    }

    #[cfg(debug_assertions)]
    fn assert_caret_in_bounds(&self) {
        let CaretPosition { line, column } = self.caret.position();
        let count = self.buffer.line_count();
        assert!(
            (1..=count).contains(&line),
            "caret line {line} outside 1..={count}"
        );
        let len = self.buffer.line_len(line - 1);
        assert!(column <= len, "caret column {column} past end of line {line} (len {len})");
    }

    #[cfg(not(debug_assertions))]
    fn assert_caret_in_bounds(&self) {}
}
