// Chunk: docs/chunks/input_events - Host-neutral key, pointer and wheel events
//!
//! Input event types for keyboard, mouse, and scroll handling.
//!
//! The widget never listens to a UI toolkit itself. The host translates its
//! native events into these types and hands them to the editor's dispatch
//! entry points. Key identifiers follow the names browsers report in
//! `KeyboardEvent.key` ("ArrowLeft", "Enter", ...), see [`Key::from_identifier`].

use unicode_segmentation::UnicodeSegmentation;

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }

    /// Any key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Builds an event from a key identifier, `None` if the identifier is unknown.
    pub fn from_identifier(identifier: &str, modifiers: Modifiers) -> Option<Self> {
        Key::from_identifier(identifier).map(|key| Self { key, modifiers })
    }
}

/// Modifier keys that can be held during a key or pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Command on macOS, the Windows key elsewhere
    pub meta: bool,
}

impl Modifiers {
    pub fn control() -> Self {
        Self {
            control: true,
            ..Default::default()
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Default::default()
        }
    }

    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt && !self.meta
    }

    /// Returns true if only shift is held (for uppercase letters).
    pub fn is_shift_only(&self) -> bool {
        self.shift && !self.control && !self.alt && !self.meta
    }

    /// Returns true if a chord modifier (Ctrl, Alt or Meta) is held.
    ///
    /// A printable key pressed with one of these is a shortcut, not text.
    pub fn has_chord_modifier(&self) -> bool {
        self.control || self.alt || self.meta
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    Escape,
    PageUp,
    PageDown,
    Insert,
    CapsLock,
    ContextMenu,
    PrintScreen,
    /// A modifier key pressed on its own
    Shift,
    Control,
    Alt,
    Meta,
}

impl Key {
    /// Maps a browser-style key identifier to a `Key`.
    ///
    /// Named keys use their `KeyboardEvent.key` names. Anything else that is
    /// exactly one character becomes `Key::Char`; a multi-char grapheme (an
    /// emoji sequence, say) is not a single key and yields `None`.
    pub fn from_identifier(identifier: &str) -> Option<Key> {
        let key = match identifier {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Enter" => Key::Return,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "Home" => Key::Home,
            "End" => Key::End,
            "Tab" => Key::Tab,
            "Escape" => Key::Escape,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Insert" => Key::Insert,
            "CapsLock" => Key::CapsLock,
            "ContextMenu" => Key::ContextMenu,
            "PrintScreen" => Key::PrintScreen,
            "Shift" => Key::Shift,
            "Control" => Key::Control,
            "Alt" => Key::Alt,
            "Meta" | "OS" => Key::Meta,
            other => {
                let mut graphemes = other.graphemes(true);
                let grapheme = graphemes.next()?;
                if graphemes.next().is_some() {
                    return None;
                }
                let mut chars = grapheme.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Key::Char(ch)
            }
        };
        Some(key)
    }

    /// Returns true for keys that never produce text by themselves.
    pub fn is_special(&self) -> bool {
        !matches!(self, Key::Char(_))
    }
}

/// Scroll delta from a trackpad or mouse wheel, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDelta {
    /// Horizontal scroll amount (positive = right)
    pub dx: f64,
    /// Vertical scroll amount (positive = down)
    pub dy: f64,
}

impl ScrollDelta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn vertical(dy: f64) -> Self {
        Self { dx: 0.0, dy }
    }
}

/// A mouse event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// The type of mouse event
    pub kind: MouseEventKind,
    /// Position in view coordinates (pixels from the widget's top-left)
    pub position: (f64, f64),
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: (x, y),
            modifiers: Modifiers::default(),
        }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(MouseEventKind::Down, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(MouseEventKind::Up, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(MouseEventKind::Moved, x, y)
    }
}

/// Kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Mouse button pressed
    Down,
    /// Mouse button released
    Up,
    /// Pointer moved, with or without a button held
    Moved,
}
