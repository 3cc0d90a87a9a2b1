// Chunk: docs/chunks/editor_composition - Single dispatch point for input
//!
//! caretpad: an embeddable multi-line text editing widget.
//!
//! The widget keeps an ordered list of lines, one caret, and a scroll offset
//! in agreement across every keystroke, click and wheel event. It does not
//! draw and it does not listen to a UI toolkit: the host feeds it
//! [`caretpad_input`] events and receives [`RenderFrame`]s through its
//! [`Renderer`].
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use caretpad::{Editor, EditorConfig, NullRenderer};
//! use caretpad::input::{Key, KeyEvent};
//!
//! let config = EditorConfig::with_viewport(640.0, 480.0);
//! let mut editor = Editor::new(config, NullRenderer).unwrap();
//!
//! let now = Instant::now();
//! for ch in "hello".chars() {
//!     editor.handle_key(&KeyEvent::char(ch), now);
//! }
//! editor.handle_key(&KeyEvent::plain(Key::Return), now);
//!
//! assert_eq!(editor.text(), "hello\n");
//! assert_eq!(editor.caret_position().line, 2);
//! ```

pub mod caret;
pub mod config;
pub mod controller;
mod editor;
pub mod error;
pub mod metrics;
pub mod notification;
pub mod render;
pub mod row_scroller;
pub mod settle;
pub mod viewport;

pub use caretpad_buffer as buffer;
pub use caretpad_input as input;

pub use caret::{Caret, CaretPixel, CaretPosition};
pub use config::{ConfigError, EditorConfig};
pub use controller::{resolve_command, Command, CursorController, Transition};
pub use editor::{Editor, PointerShape};
pub use error::{Error, Result};
pub use metrics::FontMetrics;
pub use notification::{Notification, NotificationBus, SubscriberId};
pub use render::{build_frame, NullRenderer, RenderFrame, Renderer, VisibleLine};
pub use settle::SettleTimer;
pub use viewport::{ScrollOffset, Viewport};
